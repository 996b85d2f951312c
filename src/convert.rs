use std::{
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use crate::{
    error::{AscseeError, AscseeResult},
    model::RenderSpec,
};

/// Reference palette offered for font/background color selection: the sixteen
/// basic web colors, identified by their hex value.
pub const WEB_PALETTE: &[&str] = &[
    "#000000", "#C0C0C0", "#808080", "#FFFFFF", "#800000", "#FF0000", "#800080", "#FF00FF",
    "#008000", "#00FF00", "#808000", "#FFFF00", "#000080", "#0000FF", "#008080", "#00FFFF",
];

/// Dark-to-bright glyph ramp used by the default converter.
const GLYPH_RAMP: &[u8] = b" .:-=+*#%@";

/// The rendering capabilities the orchestrator calls into.
///
/// How characters are chosen from brightness, how colors are quantized, and
/// how video frames are handled are all owned by the implementation; the core
/// only depends on this contract.
pub trait Converter {
    fn default_warp(&self) -> f64;
    fn default_text_colors(&self) -> Vec<String>;
    fn default_background_color(&self) -> String;
    fn palette(&self) -> Vec<String>;
    /// Produces an output artifact named from `spec.output`.
    fn render_image(&self, spec: &RenderSpec) -> AscseeResult<()>;
    fn render_video(&self, spec: &RenderSpec) -> AscseeResult<()>;
    /// Set once at process start.
    fn set_verbose(&mut self, verbose: bool);
}

pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

fn ensure_parent_dir(path: &Path) -> AscseeResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

pub(crate) fn parse_hex_color(identifier: &str) -> Option<[u8; 3]> {
    let hex = identifier.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some([r, g, b])
}

fn nearest_color<'a>(rgb: [u8; 3], candidates: &'a [(String, [u8; 3])]) -> &'a str {
    let mut best: (&str, u32) = ("", u32::MAX);
    for (name, c) in candidates {
        let d = c
            .iter()
            .zip(rgb.iter())
            .map(|(a, b)| {
                let diff = i32::from(*a) - i32::from(*b);
                (diff * diff) as u32
            })
            .sum();
        if d < best.1 {
            best = (name.as_str(), d);
        }
    }
    best.0
}

fn glyph_for_luma(luma: u8) -> char {
    let idx = (usize::from(luma) * (GLYPH_RAMP.len() - 1)) / 255;
    GLYPH_RAMP[idx] as char
}

/// Default converter: brightness-ramp glyphs, nearest-color quantization to
/// the spec's selected font colors, HTML artifacts. Video frames come from
/// the system `ffmpeg` binary; we deliberately shell out rather than link
/// FFmpeg to avoid native dev header/lib requirements.
#[derive(Debug, Default)]
pub struct AsciiConverter {
    verbose: bool,
}

impl AsciiConverter {
    pub fn new() -> Self {
        Self::default()
    }

    fn ascii_html(&self, img: &image::RgbImage, spec: &RenderSpec) -> AscseeResult<String> {
        let colors: Vec<(String, [u8; 3])> = spec
            .font_colors
            .iter()
            .filter_map(|c| parse_hex_color(c).map(|rgb| (c.clone(), rgb)))
            .collect();
        if colors.is_empty() {
            return Err(AscseeError::invalid_configuration(format!(
                "no parseable font colors in {:?}",
                spec.font_colors
            )));
        }

        // The sampling grid is the visual resolution: one cell per glyph,
        // font_size pixels tall, stretched horizontally by warp (at the
        // default warp of 10 a cell is half as wide as it is tall).
        let cell_h = spec.font_size.max(1);
        let cell_w = ((f64::from(spec.font_size) * 5.0 / spec.warp.max(0.1)).round() as u32).max(1);

        let font_family = Path::new(&spec.font_file)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "monospace".to_string());

        let mut html = format!(
            "<pre style=\"background:{};font-family:'{}',monospace;\
             font-size:{}px;line-height:1;\">\n",
            spec.background_color, font_family, spec.font_size
        );

        for cy in (0..img.height()).step_by(cell_h as usize) {
            let mut open_color: Option<&str> = None;
            for cx in (0..img.width()).step_by(cell_w as usize) {
                let (mut r_sum, mut g_sum, mut b_sum, mut n) = (0u64, 0u64, 0u64, 0u64);
                for y in cy..(cy + cell_h).min(img.height()) {
                    for x in cx..(cx + cell_w).min(img.width()) {
                        let p = img.get_pixel(x, y);
                        r_sum += u64::from(p[0]);
                        g_sum += u64::from(p[1]);
                        b_sum += u64::from(p[2]);
                        n += 1;
                    }
                }
                let rgb = [
                    (r_sum / n) as u8,
                    (g_sum / n) as u8,
                    (b_sum / n) as u8,
                ];
                let luma = (0.2126 * f64::from(rgb[0])
                    + 0.7152 * f64::from(rgb[1])
                    + 0.0722 * f64::from(rgb[2])) as u8;
                let color = nearest_color(rgb, &colors);

                if open_color != Some(color) {
                    if open_color.is_some() {
                        html.push_str("</span>");
                    }
                    html.push_str(&format!("<span style=\"color:{color}\">"));
                    open_color = Some(color);
                }
                html.push(glyph_for_luma(luma));
            }
            if open_color.is_some() {
                html.push_str("</span>");
            }
            html.push('\n');
        }
        html.push_str("</pre>\n");
        Ok(html)
    }

    fn render_frame_to(&self, img: &image::RgbImage, spec: &RenderSpec, out: &Path) -> AscseeResult<()> {
        use anyhow::Context as _;
        let html = self.ascii_html(img, spec)?;
        ensure_parent_dir(out)?;
        std::fs::write(out, html)
            .with_context(|| format!("failed to write artifact '{}'", out.display()))?;
        if self.verbose {
            println!("Rendered {}", out.display());
        }
        Ok(())
    }
}

impl Converter for AsciiConverter {
    fn default_warp(&self) -> f64 {
        10.0
    }

    fn default_text_colors(&self) -> Vec<String> {
        vec!["#FFFFFF".to_string()]
    }

    fn default_background_color(&self) -> String {
        "#000000".to_string()
    }

    fn palette(&self) -> Vec<String> {
        WEB_PALETTE.iter().map(|c| c.to_string()).collect()
    }

    #[tracing::instrument(skip(self, spec), fields(path = %spec.path))]
    fn render_image(&self, spec: &RenderSpec) -> AscseeResult<()> {
        let img = image::open(&spec.path)
            .map_err(|e| AscseeError::conversion(format!("failed to open '{}': {e}", spec.path)))?
            .to_rgb8();
        let out = PathBuf::from(format!("{}.html", spec.output));
        self.render_frame_to(&img, spec, &out)
    }

    #[tracing::instrument(skip(self, spec), fields(path = %spec.path))]
    fn render_video(&self, spec: &RenderSpec) -> AscseeResult<()> {
        if !is_ffmpeg_on_path() {
            return Err(AscseeError::conversion(
                "ffmpeg is required for video conversion, but was not found on PATH",
            ));
        }

        let frames_dir = PathBuf::from(format!("{}_frames", spec.output));
        std::fs::create_dir_all(&frames_dir).map_err(|e| {
            AscseeError::conversion(format!(
                "failed to create frames directory '{}': {e}",
                frames_dir.display()
            ))
        })?;

        let pattern = frames_dir.join("src_%05d.png");
        let out = Command::new("ffmpeg")
            .args(["-loglevel", "error", "-y", "-i"])
            .arg(&spec.path)
            .args(["-vf", "fps=12"])
            .arg(&pattern)
            .output()
            .map_err(|e| AscseeError::conversion(format!("failed to run ffmpeg: {e}")))?;
        if !out.status.success() {
            return Err(AscseeError::conversion(format!(
                "ffmpeg failed for '{}': {}",
                spec.path,
                String::from_utf8_lossy(&out.stderr).trim()
            )));
        }

        let mut sources: Vec<PathBuf> = std::fs::read_dir(&frames_dir)
            .map_err(|e| AscseeError::conversion(format!("failed to list frames: {e}")))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with("src_") && n.ends_with(".png"))
            })
            .collect();
        sources.sort();

        tracing::debug!(frames = sources.len(), "extracted video frames");
        for (i, src) in sources.iter().enumerate() {
            let img = image::open(src)
                .map_err(|e| {
                    AscseeError::conversion(format!("failed to open frame '{}': {e}", src.display()))
                })?
                .to_rgb8();
            let out = frames_dir.join(format!("frame_{:05}.html", i + 1));
            self.render_frame_to(&img, spec, &out)?;
            let _ = std::fs::remove_file(src);
        }
        Ok(())
    }

    fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }
}
