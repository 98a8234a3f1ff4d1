use super::*;

pub(crate) fn heat(t: f64) -> Rgb<u8> {
  let color = colorous::TURBO.eval_continuous(t.clamp(0.0, 1.0));

  Rgb([color.r, color.g, color.b])
}

pub(crate) fn colorize(gray: &GrayImage) -> RgbImage {
  let mut colored = RgbImage::new(gray.width(), gray.height());

  for (x, y, pixel) in gray.enumerate_pixels() {
    colored.put_pixel(x, y, heat(pixel[0] as f64 / 255.0));
  }

  colored
}

pub(crate) fn blend_over_white(image: &RgbImage, alpha: f64) -> RgbImage {
  let alpha = alpha.clamp(0.0, 1.0);

  let mut blended = RgbImage::new(image.width(), image.height());

  for (x, y, pixel) in image.enumerate_pixels() {
    let channels = pixel
      .0
      .map(|channel| (alpha * channel as f64 + (1.0 - alpha) * 255.0) as u8);

    blended.put_pixel(x, y, Rgb(channels));
  }

  blended
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn heat_matches_gradient_endpoints() {
    let low = colorous::TURBO.eval_continuous(0.0);
    let high = colorous::TURBO.eval_continuous(1.0);

    assert_eq!(heat(0.0), Rgb([low.r, low.g, low.b]));
    assert_eq!(heat(1.0), Rgb([high.r, high.g, high.b]));
  }

  #[test]
  fn heat_clamps_out_of_range_input() {
    assert_eq!(heat(-1.0), heat(0.0));
    assert_eq!(heat(2.0), heat(1.0));
  }

  #[test]
  fn colorize_maps_luma_through_gradient() {
    let mut gray = GrayImage::new(2, 1);
    gray.put_pixel(0, 0, image::Luma([0]));
    gray.put_pixel(1, 0, image::Luma([255]));

    let colored = colorize(&gray);

    assert_eq!(*colored.get_pixel(0, 0), heat(0.0));
    assert_eq!(*colored.get_pixel(1, 0), heat(1.0));
  }

  #[test]
  fn blend_over_white_extremes() {
    let image = RgbImage::from_pixel(2, 2, Rgb([40, 80, 120]));

    assert_eq!(blend_over_white(&image, 1.0), image);

    assert!(blend_over_white(&image, 0.0)
      .pixels()
      .all(|pixel| *pixel == Rgb([255, 255, 255])));
  }
}
