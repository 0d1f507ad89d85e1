//! Annotated grayscale rendering of a single 2D slice.
//!
//! A [`SliceFigure`] borrows the slice it draws and produces a
//! [`RenderedImage`]: a square RGB canvas holding a title, the image inside
//! a framed axes area with pixel ticks, axis labels and a colour bar showing
//! the intensity range.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{ImageBuffer, ImageFormat, Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;
use ndarray::ArrayView2;

use crate::enums::Origin;
use crate::error::ScanError;
use crate::text::{draw_text, draw_text_centered, draw_text_vertical, text_height, text_width};
use crate::ticks::{format_tick, nice_ticks, pixel_ticks, tick_step};
use crate::volume::IntensityRange;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const INK: Rgb<u8> = Rgb([0, 0, 0]);
const AXIS_TICKS: usize = 6;
const COLORBAR_TICKS: usize = 8;

pub struct SliceFigure<'a> {
    pub data: ArrayView2<'a, f32>,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub legend_label: String,
    pub origin: Origin,
}

/// A rendered figure ready to be written to disk
pub struct RenderedImage {
    pub canvas: RgbImage,
}

impl RenderedImage {
    /// Write the figure as a PNG file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ScanError> {
        self.canvas.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }
}

/// Pixel geometry of a figure, computed before anything is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
struct Layout {
    text_scale: u32,
    title_scale: u32,
    pad: u32,
    tick_len: u32,
    image_x: u32,
    image_y: u32,
    image_w: u32,
    image_h: u32,
    colorbar_x: u32,
    colorbar_w: u32,
}

struct Labels {
    x: Vec<(f64, String)>,
    y: Vec<(f64, String)>,
    colorbar: Vec<(f64, String)>,
}

impl Labels {
    fn new(rows: usize, cols: usize, range: Option<IntensityRange>) -> Self {
        let colorbar = range
            .map(|r| labelled(nice_ticks(r.min as f64, r.max as f64, COLORBAR_TICKS)))
            .unwrap_or_default();
        Self {
            x: labelled(pixel_ticks(cols, AXIS_TICKS)),
            y: labelled(pixel_ticks(rows, AXIS_TICKS)),
            colorbar,
        }
    }
}

fn labelled(ticks: Vec<f64>) -> Vec<(f64, String)> {
    let step = tick_step(&ticks);
    ticks
        .into_iter()
        .map(|value| (value, format_tick(value, step)))
        .collect()
}

fn widest(labels: &[(f64, String)], scale: u32) -> u32 {
    labels
        .iter()
        .map(|(_, label)| text_width(label, scale))
        .max()
        .unwrap_or(0)
}

impl<'a> SliceFigure<'a> {
    /// Grayscale figure of `data` with the conventional pixel axis labels
    pub fn grayscale(data: ArrayView2<'a, f32>, title: impl Into<String>) -> Self {
        Self {
            data,
            title: title.into(),
            x_label: "X axis (pixels)".to_string(),
            y_label: "Y axis (pixels)".to_string(),
            legend_label: "Intensity (Float32)".to_string(),
            origin: Origin::Lower,
        }
    }

    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    /// Render onto a square canvas of `figure_size_inches * dpi` pixels
    pub fn render(&self, dpi: u32, figure_size_inches: f32) -> RenderedImage {
        let side = ((figure_size_inches * dpi as f32).round() as u32).max(64);
        let mut canvas = ImageBuffer::from_pixel(side, side, BACKGROUND);

        let (rows, cols) = self.data.dim();
        let range = IntensityRange::of(&self.data);
        let labels = Labels::new(rows, cols, range);
        let layout = self.layout(side, dpi, &labels);

        draw_text_centered(
            &mut canvas,
            &self.title,
            (layout.image_x + layout.image_w / 2) as i64,
            layout.pad as i64,
            layout.title_scale,
            INK,
        );

        if rows == 0 || cols == 0 {
            return RenderedImage { canvas };
        }

        let slice_image = self.slice_to_image(range);
        let scaled = imageops::resize(
            &slice_image,
            layout.image_w,
            layout.image_h,
            FilterType::Nearest,
        );
        imageops::replace(
            &mut canvas,
            &scaled,
            layout.image_x as i64,
            layout.image_y as i64,
        );

        self.draw_axes(&mut canvas, &layout, &labels, rows, cols);
        self.draw_colorbar(&mut canvas, &layout, &labels, range);

        RenderedImage { canvas }
    }

    fn layout(&self, side: u32, dpi: u32, labels: &Labels) -> Layout {
        let text_scale = (dpi / 50).max(1);
        let title_scale = text_scale + 1;
        let pad = 4 * text_scale;
        let tick_len = 3 * text_scale;
        let line = text_height(text_scale);

        let top = pad + text_height(title_scale) + 2 * pad;
        let left = pad + line + pad + widest(&labels.y, text_scale) + pad + tick_len;
        let bottom = tick_len + pad + line + pad + line + pad;
        let colorbar_w = (side / 40).max(8);
        let colorbar_gap = 4 * pad;
        let right = colorbar_gap
            + colorbar_w
            + tick_len
            + pad
            + widest(&labels.colorbar, text_scale)
            + pad
            + line
            + pad;

        let avail_w = side.saturating_sub(left + right).max(1);
        let avail_h = side.saturating_sub(top + bottom).max(1);

        let (rows, cols) = self.data.dim();
        let (rows, cols) = (rows.max(1) as f32, cols.max(1) as f32);
        let fit = (avail_w as f32 / cols).min(avail_h as f32 / rows);
        let image_w = ((cols * fit).floor() as u32).clamp(1, avail_w);
        let image_h = ((rows * fit).floor() as u32).clamp(1, avail_h);

        let image_x = left + (avail_w - image_w) / 2;
        let image_y = top + (avail_h - image_h) / 2;

        Layout {
            text_scale,
            title_scale,
            pad,
            tick_len,
            image_x,
            image_y,
            image_w,
            image_h,
            colorbar_x: image_x + image_w + colorbar_gap,
            colorbar_w,
        }
    }

    // Slice to image at native resolution, flipped according to the origin
    fn slice_to_image(&self, range: Option<IntensityRange>) -> RgbImage {
        let (rows, cols) = self.data.dim();
        ImageBuffer::from_fn(cols as u32, rows as u32, |x, y| {
            let row = match self.origin {
                Origin::Upper => y as usize,
                Origin::Lower => rows - 1 - y as usize,
            };
            let value = self.data[[row, x as usize]];
            match range {
                Some(range) if value.is_finite() => {
                    let level = range.normalize_to_u8(value);
                    Rgb([level, level, level])
                }
                _ => BACKGROUND,
            }
        })
    }

    /// Vertical canvas position of the centre of data row `row`
    fn row_position(&self, layout: &Layout, row: f64, rows: usize) -> f32 {
        let offset = ((row + 0.5) * layout.image_h as f64 / rows as f64) as f32;
        match self.origin {
            Origin::Upper => layout.image_y as f32 + offset,
            Origin::Lower => (layout.image_y + layout.image_h) as f32 - offset,
        }
    }

    fn draw_axes(
        &self,
        canvas: &mut RgbImage,
        layout: &Layout,
        labels: &Labels,
        rows: usize,
        cols: usize,
    ) {
        let scale = layout.text_scale;
        let line = text_height(scale);
        let left = layout.image_x as f32 - 1.0;
        let bottom = (layout.image_y + layout.image_h) as f32;
        let tick_len = layout.tick_len as f32;

        draw_hollow_rect_mut(
            canvas,
            Rect::at(layout.image_x as i32 - 1, layout.image_y as i32 - 1)
                .of_size(layout.image_w + 2, layout.image_h + 2),
            INK,
        );

        for (value, label) in &labels.x {
            let x = layout.image_x as f32
                + ((value + 0.5) * layout.image_w as f64 / cols as f64) as f32;
            draw_line_segment_mut(canvas, (x, bottom), (x, bottom + tick_len), INK);
            draw_text_centered(
                canvas,
                label,
                x as i64,
                (bottom + tick_len) as i64 + layout.pad as i64,
                scale,
                INK,
            );
        }

        for (value, label) in &labels.y {
            let y = self.row_position(layout, *value, rows);
            draw_line_segment_mut(canvas, (left - tick_len, y), (left, y), INK);
            let label_x = (left - tick_len) as i64
                - layout.pad as i64
                - text_width(label, scale) as i64;
            draw_text(canvas, label, label_x, y as i64 - line as i64 / 2, scale, INK);
        }

        let center_x = (layout.image_x + layout.image_w / 2) as i64;
        let x_label_y = bottom as i64 + (layout.tick_len + 2 * layout.pad + line) as i64;
        draw_text_centered(canvas, &self.x_label, center_x, x_label_y, scale, INK);

        let center_y = (layout.image_y + layout.image_h / 2) as i64;
        draw_text_vertical(canvas, &self.y_label, layout.pad as i64, center_y, scale, INK);
    }

    fn draw_colorbar(
        &self,
        canvas: &mut RgbImage,
        layout: &Layout,
        labels: &Labels,
        range: Option<IntensityRange>,
    ) {
        let scale = layout.text_scale;
        let line = text_height(scale);
        let (x0, y0) = (layout.colorbar_x, layout.image_y);
        let (w, h) = (layout.colorbar_w, layout.image_h);

        for y in 0..h {
            let fraction = 1.0 - (y as f32 + 0.5) / h as f32;
            let level = (fraction * 255.0).round().clamp(0.0, 255.0) as u8;
            for x in 0..w {
                if x0 + x < canvas.width() && y0 + y < canvas.height() {
                    canvas.put_pixel(x0 + x, y0 + y, Rgb([level, level, level]));
                }
            }
        }
        draw_hollow_rect_mut(
            canvas,
            Rect::at(x0 as i32 - 1, y0 as i32 - 1).of_size(w + 2, h + 2),
            INK,
        );

        let right = (x0 + w) as f32;
        let tick_len = layout.tick_len as f32;
        if let Some(range) = range {
            let span = (range.max - range.min) as f64;
            for (value, label) in &labels.colorbar {
                let fraction = if span > 0.0 {
                    (value - range.min as f64) / span
                } else {
                    0.0
                };
                let y = (y0 + h) as f32 - (fraction * h as f64) as f32;
                draw_line_segment_mut(canvas, (right, y), (right + tick_len, y), INK);
                draw_text(
                    canvas,
                    label,
                    (right + tick_len) as i64 + layout.pad as i64,
                    y as i64 - line as i64 / 2,
                    scale,
                    INK,
                );
            }
        }

        let legend_x = (right + tick_len) as i64
            + (2 * layout.pad + widest(&labels.colorbar, scale)) as i64;
        draw_text_vertical(
            canvas,
            &self.legend_label,
            legend_x,
            (y0 + h / 2) as i64,
            scale,
            INK,
        );
    }
}
