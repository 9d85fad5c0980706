//! Icon decoding and normalization.

use crate::error::IconError;
use image::codecs::gif::GifDecoder;
use image::imageops::FilterType;
use image::{AnimationDecoder, DynamicImage, ImageFormat, RgbaImage};
use log::{debug, warn};
use std::path::Path;

/// Edge length of a button icon, in pixels.
pub const DEFAULT_ICON_SIZE: u32 = 32;

/// A decoded, resized icon ready to be handed to a renderer.
///
/// The handle owns its pixels. Dropping it (with the entry that holds it)
/// releases the image.
#[derive(Clone, Debug, PartialEq)]
pub struct IconHandle {
    image: RgbaImage,
}

impl IconHandle {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Borrow the pixels as an RGBA8 buffer.
    pub fn as_rgba(&self) -> &RgbaImage {
        &self.image
    }

    /// Tightly packed RGBA bytes, row-major.
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn into_rgba(self) -> RgbaImage {
        self.image
    }
}

/// Resolves icon paths into [`IconHandle`]s of a fixed square size.
///
/// Nothing is cached: every call reads and decodes the file again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconResolver {
    size: u32,
}

impl Default for IconResolver {
    fn default() -> Self {
        Self {
            size: DEFAULT_ICON_SIZE,
        }
    }
}

impl IconResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver producing `size`×`size` icons.
    pub fn with_size(size: u32) -> Self {
        Self { size: size.max(1) }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Resolve an optional icon path.
    ///
    /// Returns `None` for an absent or blank path, a path that is not a file,
    /// or an image that fails to decode. Failures are logged, not returned.
    pub fn resolve(&self, icon_path: Option<&str>) -> Option<IconHandle> {
        let path = icon_path.filter(|p| !p.trim().is_empty())?;

        match self.load(Path::new(path)) {
            Ok(handle) => Some(handle),
            Err(IconError::Missing(p)) => {
                debug!("Icon {} does not exist, using text fallback", p.display());
                None
            }
            Err(e) => {
                warn!("{}", e);
                None
            }
        }
    }

    /// Load and normalize the icon at `path`, reporting why it failed.
    pub fn load(&self, path: &Path) -> Result<IconHandle, IconError> {
        if !path.is_file() {
            return Err(IconError::Missing(path.to_path_buf()));
        }

        let img = decode_first_frame(path)?;
        let resized = img.resize_exact(self.size, self.size, FilterType::Lanczos3);

        debug!(
            "Loaded icon {} ({}x{} -> {}x{})",
            path.display(),
            img.width(),
            img.height(),
            self.size,
            self.size
        );

        Ok(IconHandle {
            image: resized.into_rgba8(),
        })
    }
}

/// Decode `path`, taking frame 0 of animated GIFs.
fn decode_first_frame(path: &Path) -> Result<DynamicImage, IconError> {
    let io_err = |source| IconError::Io {
        path: path.to_path_buf(),
        source,
    };
    let decode_err = |source| IconError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let reader = image::io::Reader::open(path)
        .map_err(io_err)?
        .with_guessed_format()
        .map_err(io_err)?;

    if reader.format() == Some(ImageFormat::Gif) {
        // Format sniffing rewinds, so the same handle decodes from the start.
        let decoder = GifDecoder::new(reader.into_inner()).map_err(decode_err)?;
        let frame = decoder
            .into_frames()
            .next()
            .ok_or_else(|| IconError::NoFrames(path.to_path_buf()))?
            .map_err(decode_err)?;
        return Ok(DynamicImage::ImageRgba8(frame.into_buffer()));
    }

    reader.decode().map_err(decode_err)
}
