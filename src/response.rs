use super::*;

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct ModelInfo {
  pub(crate) input_layer: String,
  pub(crate) cnn_layers: Vec<String>,
  pub(crate) input_shape: Vec<u64>,
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct GradcamResponse {
  pub(crate) status: String,
  #[serde(default)]
  img_input_base64: String,
  #[serde(default)]
  img_result_base64: String,
}

impl GradcamResponse {
  pub(crate) fn images(&self) -> Result<(DynamicImage, DynamicImage)> {
    if self.status != "Success" {
      bail!("{}", self.status);
    }

    Ok((
      decode_base64_image(&self.img_input_base64)
        .context("failed to decode input image")?,
      decode_base64_image(&self.img_result_base64)
        .context("failed to decode grad-cam image")?,
    ))
  }
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct CropResponse {
  pub(crate) status: String,
  #[serde(default)]
  img_result_base64: String,
}

impl CropResponse {
  pub(crate) fn image(&self) -> Result<DynamicImage> {
    if self.status != "Success" {
      bail!("{}", self.status);
    }

    decode_base64_image(&self.img_result_base64)
      .context("failed to decode cropped image")
  }
}

pub(crate) fn decode_base64_image(data: &str) -> Result<DynamicImage> {
  let bytes = BASE64.decode(data.trim())?;

  Ok(image::load_from_memory(&bytes)?)
}

#[cfg(test)]
mod tests {
  use {super::*, image::ImageFormat, std::io::Cursor};

  fn png_base64(width: u32, height: u32) -> String {
    let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(
      width,
      height,
      Rgb([10, 200, 30]),
    ));

    let mut bytes = Vec::new();

    image
      .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
      .unwrap();

    BASE64.encode(bytes)
  }

  #[test]
  fn decode_base64_image_round_trip() {
    let image = decode_base64_image(&png_base64(4, 3)).unwrap();

    assert_eq!(image.width(), 4);
    assert_eq!(image.height(), 3);
  }

  #[test]
  fn decode_base64_image_rejects_invalid_input() {
    assert!(decode_base64_image("not base64!!!").is_err());
    assert!(decode_base64_image(&BASE64.encode(b"not an image")).is_err());
  }

  #[test]
  fn model_info_from_json() {
    let info: ModelInfo = serde_json::from_str(
      r#"{
        "status": "Success",
        "input_layer": "input_1",
        "cnn_layers": ["conv2d", "conv2d_1", "conv2d_2"],
        "input_shape": [224, 224, 3]
      }"#,
    )
    .unwrap();

    assert_eq!(info.input_layer, "input_1");
    assert_eq!(info.cnn_layers.len(), 3);
    assert_eq!(info.input_shape, [224, 224, 3]);
  }

  #[test]
  fn gradcam_response_surfaces_failure_status() {
    let response: GradcamResponse =
      serde_json::from_str(r#"{"status": "Fail: layer not found"}"#).unwrap();

    assert_eq!(
      response.images().unwrap_err().to_string(),
      "Fail: layer not found"
    );
  }

  #[test]
  fn gradcam_response_decodes_both_images() {
    let response: GradcamResponse = serde_json::from_str(&format!(
      r#"{{
        "status": "Success",
        "img_input_base64": "{}",
        "img_result_base64": "{}"
      }}"#,
      png_base64(8, 6),
      png_base64(4, 4),
    ))
    .unwrap();

    let (input, result) = response.images().unwrap();

    assert_eq!((input.width(), input.height()), (8, 6));
    assert_eq!((result.width(), result.height()), (4, 4));
  }

  #[test]
  fn crop_response_surfaces_failure_status() {
    let response: CropResponse =
      serde_json::from_str(r#"{"status": "Fail: no rectangle"}"#).unwrap();

    assert_eq!(
      response.image().unwrap_err().to_string(),
      "Fail: no rectangle"
    );
  }
}
