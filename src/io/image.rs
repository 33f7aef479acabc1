//! Sprite sheet loading, grid compositing, and PNG export
//!
//! Sprites are PNG tiles named by glyph category prefix, with any number of
//! variants per category ("ud.png", "ud-2.png", ...). Rendering picks a random
//! variant per cell, composites the grid over a random background with an
//! offset silhouette shadow, and finishes with a few random color transforms.

use std::fs;
use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage, imageops};

use crate::algorithm::parts::Part;
use crate::algorithm::selection::RandomSelector;
use crate::io::configuration::{COLOR_TRANSFORM_CHANCE, SILHOUETTE_OFFSET};
use crate::io::error::{CatwalkError, Result};
use crate::spatial::GlyphGrid;

/// Filename prefixes and the glyph categories their sprites draw
///
/// `None` marks the optional bonus creature, which has no grid part.
const SPRITE_PREFIXES: [(&str, Option<Part>); 14] = [
    ("empty", Some(Part::Empty)),
    ("ud", Some(Part::Vertical)),
    ("lr", Some(Part::Horizontal)),
    ("ul", Some(Part::UpLeft)),
    ("ur", Some(Part::UpRight)),
    ("dl", Some(Part::DownLeft)),
    ("dr", Some(Part::DownRight)),
    ("cross", Some(Part::Cross)),
    ("butt", Some(Part::Start)),
    ("head-r", Some(Part::HeadRight)),
    ("head-u", Some(Part::HeadUp)),
    ("head-l", Some(Part::HeadLeft)),
    ("head-d", Some(Part::HeadDown)),
    ("bonus", None),
];

const PART_CATEGORIES: usize = 13;

const fn part_index(part: Part) -> usize {
    match part {
        Part::Empty => 0,
        Part::Vertical => 1,
        Part::Horizontal => 2,
        Part::UpLeft => 3,
        Part::UpRight => 4,
        Part::DownLeft => 5,
        Part::DownRight => 6,
        Part::Cross => 7,
        Part::Start => 8,
        Part::HeadRight => 9,
        Part::HeadUp => 10,
        Part::HeadLeft => 11,
        Part::HeadDown => 12,
    }
}

/// Loaded sprite variants for every glyph category
pub struct SpriteSheet {
    parts: [Vec<RgbaImage>; PART_CATEGORIES],
    bonus: Vec<RgbaImage>,
    sprite_width: u32,
    sprite_height: u32,
}

impl SpriteSheet {
    /// Load all sprites from a directory, matching files by category prefix
    ///
    /// Sprite dimensions are inferred from the first file and enforced across
    /// the sheet. Files matching no known prefix are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read, a sprite fails to
    /// load, dimensions are inconsistent, the directory holds no usable
    /// sprites, or any glyph category ends up without a variant.
    #[allow(clippy::print_stderr)]
    pub fn load(dir: &Path) -> Result<Self> {
        let entries = fs::read_dir(dir).map_err(|e| CatwalkError::FileSystem {
            path: dir.to_path_buf(),
            operation: "read sprite directory",
            source: e,
        })?;

        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| CatwalkError::FileSystem {
                path: dir.to_path_buf(),
                operation: "read sprite directory entry",
                source: e,
            })?;
            paths.push(entry.path());
        }
        paths.sort();

        let mut parts: [Vec<RgbaImage>; PART_CATEGORIES] = std::array::from_fn(|_| Vec::new());
        let mut bonus = Vec::new();
        let mut size: Option<(u32, u32)> = None;

        for path in paths {
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let Some((_, target)) = SPRITE_PREFIXES
                .iter()
                .find(|(prefix, _)| name.starts_with(prefix))
            else {
                eprintln!("Warning: sprite filename matches no category prefix: '{name}'");
                continue;
            };

            let sprite = image::open(&path)
                .map_err(|e| CatwalkError::SpriteLoad {
                    path: path.clone(),
                    source: e,
                })?
                .to_rgba8();

            let dimensions = sprite.dimensions();
            match size {
                None => size = Some(dimensions),
                Some(expected) if expected != dimensions => {
                    return Err(CatwalkError::SpriteSize {
                        path,
                        expected,
                        found: dimensions,
                    });
                }
                Some(_) => {}
            }

            match target {
                Some(part) => {
                    if let Some(bucket) = parts.get_mut(part_index(*part)) {
                        bucket.push(sprite);
                    }
                }
                None => bonus.push(sprite),
            }
        }

        let Some((sprite_width, sprite_height)) = size else {
            return Err(CatwalkError::EmptySpriteDirectory {
                path: dir.to_path_buf(),
            });
        };

        for (prefix, target) in &SPRITE_PREFIXES {
            if let Some(part) = target {
                if parts.get(part_index(*part)).is_none_or(Vec::is_empty) {
                    return Err(CatwalkError::MissingSpriteCategory { category: prefix });
                }
            }
        }

        Ok(Self {
            parts,
            bonus,
            sprite_width,
            sprite_height,
        })
    }

    /// Pixel dimensions shared by every sprite in the sheet
    pub const fn sprite_size(&self) -> (u32, u32) {
        (self.sprite_width, self.sprite_height)
    }

    /// Whether the optional bonus creature category was loaded
    pub fn has_bonus(&self) -> bool {
        !self.bonus.is_empty()
    }

    /// Number of loaded variants for a glyph category
    pub fn variant_count(&self, part: Part) -> usize {
        self.parts.get(part_index(part)).map_or(0, Vec::len)
    }

    fn variant(&self, part: Part, selector: &mut RandomSelector) -> Option<&RgbaImage> {
        self.parts
            .get(part_index(part))
            .and_then(|bucket| selector.pick(bucket))
    }

    /// Composite the grid into a finished image
    ///
    /// `bonus_cell` is a screen-space cell (x, row-from-top) to overlay a
    /// bonus sprite on, found beforehand over empty grid space.
    pub fn render(
        &self,
        grid: &GlyphGrid,
        bonus_cell: Option<(usize, usize)>,
        selector: &mut RandomSelector,
    ) -> RgbaImage {
        let cell_w = i64::from(self.sprite_width);
        let cell_h = i64::from(self.sprite_height);
        let width = self.sprite_width * grid.width() as u32;
        let height = self.sprite_height * grid.height() as u32;

        let mut layer = RgbaImage::new(width, height);
        for screen_y in 0..grid.height() {
            for x in 0..grid.width() {
                // Screen rows run top-down, grid rows bottom-up
                let part = grid.part(x, grid.height() - screen_y - 1);
                if let Some(sprite) = self.variant(part, selector) {
                    imageops::overlay(&mut layer, sprite, cell_w * x as i64, cell_h * screen_y as i64);
                }
            }
        }

        if let Some((x, screen_y)) = bonus_cell {
            if let Some(sprite) = selector.pick(&self.bonus) {
                imageops::overlay(&mut layer, sprite, cell_w * x as i64, cell_h * screen_y as i64);
            }
        }

        let mirror = selector.unit();
        if mirror < 0.1 {
            layer = imageops::flip_horizontal(&layer);
        } else if mirror < 0.14 {
            layer = imageops::flip_horizontal(&layer);
            layer = imageops::flip_vertical(&layer);
        } else if mirror < 0.18 {
            layer = imageops::flip_vertical(&layer);
        }
        if selector.unit() < 0.2 {
            layer = imageops::rotate180(&layer);
        }

        let background = Rgba([
            selector.below(256) as u8,
            selector.below(256) as u8,
            selector.below(256) as u8,
            255,
        ]);
        let mut canvas = RgbaImage::from_pixel(width, height, background);

        let shadow_color = Rgba([
            selector.below(50) as u8,
            selector.below(50) as u8,
            selector.below(50) as u8,
            255,
        ]);
        let shadow = silhouette(&layer, shadow_color);
        let span = (SILHOUETTE_OFFSET * 2 + 1) as usize;
        let offset_x = selector.below(span) as i64 - i64::from(SILHOUETTE_OFFSET);
        let offset_y = selector.below(span) as i64 - i64::from(SILHOUETTE_OFFSET);
        imageops::overlay(&mut canvas, &shadow, offset_x, offset_y);
        imageops::overlay(&mut canvas, &layer, 0, 0);

        if selector.unit() < COLOR_TRANSFORM_CHANCE {
            let passes = 1 + selector.below(2);
            for _ in 0..passes {
                apply_random_color_transform(&mut canvas, selector);
            }
        }

        // One corner pixel just below full opacity keeps lossy recompression
        // from discarding the alpha channel downstream
        if let Some(pixel) = canvas.get_pixel_mut_checked(0, 0) {
            pixel.0[3] = pixel.0[3].saturating_sub(1);
        }

        canvas
    }
}

/// Copy of the layer with every visible pixel recolored for the drop shadow
fn silhouette(layer: &RgbaImage, color: Rgba<u8>) -> RgbaImage {
    let mut shadow = layer.clone();
    for pixel in shadow.pixels_mut() {
        if pixel.0[3] > 0 {
            pixel.0 = [color.0[0], color.0[1], color.0[2], pixel.0[3]];
        }
    }
    shadow
}

fn apply_random_color_transform(canvas: &mut RgbaImage, selector: &mut RandomSelector) {
    let roll = selector.unit();
    if roll < 0.3 {
        imageops::colorops::huerotate_in_place(canvas, selector.below(360) as i32);
    } else if roll < 0.5 {
        imageops::colorops::brighten_in_place(canvas, selector.range(5, 20) as i32);
    } else if roll < 0.6 {
        desaturate_in_place(canvas, f64::from(selector.range(10, 100)) / 100.0);
    } else if roll < 0.7 {
        lighten_in_place(canvas, f64::from(selector.range(10, 20)) / 100.0);
    } else if roll < 0.8 {
        tint_channel_in_place(canvas, 0, selector.range(10, 50) as u8);
    } else if roll < 0.9 {
        tint_channel_in_place(canvas, 1, selector.range(10, 50) as u8);
    } else {
        tint_channel_in_place(canvas, 2, selector.range(10, 50) as u8);
    }
}

/// Mix each pixel toward its luma by `strength` in [0, 1]
fn desaturate_in_place(canvas: &mut RgbaImage, strength: f64) {
    for pixel in canvas.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        let luma = 0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b);
        let mix = |channel: u8| -> u8 {
            let value = f64::from(channel) + (luma - f64::from(channel)) * strength;
            value.clamp(0.0, 255.0) as u8
        };
        pixel.0 = [mix(r), mix(g), mix(b), a];
    }
}

/// Mix each pixel toward white by `strength` in [0, 1]
fn lighten_in_place(canvas: &mut RgbaImage, strength: f64) {
    for pixel in canvas.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        let mix = |channel: u8| -> u8 {
            let value = f64::from(channel) + (255.0 - f64::from(channel)) * strength;
            value.clamp(0.0, 255.0) as u8
        };
        pixel.0 = [mix(r), mix(g), mix(b), a];
    }
}

/// Saturating boost of one color channel across the image
fn tint_channel_in_place(canvas: &mut RgbaImage, channel: usize, amount: u8) {
    for pixel in canvas.pixels_mut() {
        if let Some(value) = pixel.0.get_mut(channel) {
            *value = value.saturating_add(amount);
        }
    }
}

/// Write a rendered image as a PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be saved to the given path.
pub fn export_png(image: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent).map_err(|e| CatwalkError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save(output_path)
        .map_err(|e| CatwalkError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
