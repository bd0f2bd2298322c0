// File: crates/hub-chart/src/surface.rs
// Summary: Device-pixel surface preparation: buffer sizing and density scale transform.

use anyhow::Result;
use skia_safe as skia;

use crate::types::SurfaceSpec;

/// A CPU raster surface whose backing buffer is sized in device pixels while
/// the canvas transform keeps all drawing in logical-pixel units.
pub struct ScaledSurface {
    surface: skia::Surface,
    spec: SurfaceSpec,
}

impl ScaledSurface {
    /// Prepare a surface for `spec`: the buffer gets `round(logical * ratio)`
    /// device pixels per axis and a uniform `ratio` scale is installed on the
    /// canvas, so callers keep drawing in logical coordinates at any density.
    ///
    /// Allocation failure is the only error; unusable spec values are replaced
    /// with the documented fallbacks first.
    pub fn prepare(spec: SurfaceSpec) -> Result<Self> {
        let spec = spec.sanitized();
        let (device_w, device_h) = spec.device_size();
        let mut surface = skia::surfaces::raster_n32_premul((device_w, device_h))
            .ok_or_else(|| anyhow::anyhow!("failed to create {device_w}x{device_h} raster surface"))?;
        let ratio = spec.pixel_ratio as f32;
        surface.canvas().scale((ratio, ratio));
        Ok(Self { surface, spec })
    }

    pub fn spec(&self) -> SurfaceSpec {
        self.spec
    }

    pub fn logical_width(&self) -> f64 {
        self.spec.logical_width
    }

    pub fn logical_height(&self) -> f64 {
        self.spec.logical_height
    }

    /// Backing buffer size in device pixels.
    pub fn device_size(&self) -> (i32, i32) {
        (self.surface.width(), self.surface.height())
    }

    pub fn canvas(&mut self) -> &skia::Canvas {
        self.surface.canvas()
    }

    /// Copy the full buffer out as tightly packed RGBA8888: (pixels, width,
    /// height, row stride in bytes).
    pub fn to_rgba8(&mut self) -> Result<(Vec<u8>, i32, i32, usize)> {
        let (w, h) = self.device_size();
        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !self.surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("failed to read back surface pixels");
        }
        Ok((pixels, w, h, stride))
    }

    /// Encode the current contents as PNG bytes.
    pub fn to_png_bytes(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }
}
