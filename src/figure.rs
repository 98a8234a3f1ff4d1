use super::*;

const MARGIN: u32 = 16;
const GAP: u32 = 24;
const BAR_WIDTH: u32 = 20;

const HEATMAP_ALPHA: f64 = 0.5;

pub(crate) fn heatmap_panel(image: &DynamicImage) -> RgbImage {
  // a single-channel response is a raw heat-map, anything else is an
  // overlay the service already composed
  match image.as_luma8() {
    Some(gray) => blend_over_white(&colorize(gray), HEATMAP_ALPHA),
    None => image.to_rgb8(),
  }
}

pub(crate) fn compose(input: &RgbImage, result: &RgbImage) -> RgbImage {
  let height = input.height().max(result.height());

  let left = scale_to_height(input, height);
  let right = scale_to_height(result, height);

  let width =
    MARGIN + left.width() + GAP + right.width() + GAP + BAR_WIDTH + MARGIN;

  let mut canvas =
    RgbImage::from_pixel(width, height + 2 * MARGIN, Rgb([255, 255, 255]));

  imageops::replace(&mut canvas, &left, MARGIN.into(), MARGIN.into());

  imageops::replace(
    &mut canvas,
    &right,
    (MARGIN + left.width() + GAP).into(),
    MARGIN.into(),
  );

  draw_colorbar(
    &mut canvas,
    MARGIN + left.width() + GAP + right.width() + GAP,
    MARGIN,
    BAR_WIDTH,
    height,
  );

  canvas
}

fn scale_to_height(image: &RgbImage, height: u32) -> RgbImage {
  if image.height() == height {
    return image.clone();
  }

  let width = (image.width() as f64 * height as f64 / image.height() as f64)
    .round()
    .max(1.0) as u32;

  imageops::resize(image, width, height, FilterType::Triangle)
}

fn draw_colorbar(
  canvas: &mut RgbImage,
  x: u32,
  y: u32,
  width: u32,
  height: u32,
) {
  for row in 0..height {
    let t = match height {
      0 | 1 => 1.0,
      _ => 1.0 - row as f64 / (height - 1) as f64,
    };

    let color = heat(t);

    for column in 0..width {
      canvas.put_pixel(x + column, y + row, color);
    }
  }
}
