use super::*;

#[derive(Debug, Clone)]
pub(crate) struct Client {
  base: String,
  http: reqwest::blocking::Client,
}

impl Client {
  pub(crate) fn new(server: &str) -> Result<Self> {
    Ok(Self {
      base: server.trim_end_matches('/').into(),
      http: reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(120))
        .build()
        .context("failed to create http client")?,
    })
  }

  fn endpoint(&self, path: &str) -> String {
    format!("{}/{}", self.base, path)
  }

  pub(crate) fn info(&self) -> Result<serde_json::Value> {
    let url = self.endpoint("info");

    log::debug!("GET {url}");

    self
      .http
      .get(&url)
      .send()?
      .error_for_status()?
      .json()
      .context("failed to parse service info")
  }

  pub(crate) fn load_model(&self, model: &Path) -> Result<ModelInfo> {
    let url = self.endpoint("load_model");

    log::debug!("POST {url}");

    let form = Form::new().part("file", file_part(model)?);

    self
      .http
      .post(&url)
      .multipart(form)
      .send()?
      .error_for_status()?
      .json()
      .context("failed to parse model description")
  }

  pub(crate) fn gradcam(
    &self,
    layer: &str,
    image: &Path,
    model: &Path,
  ) -> Result<GradcamResponse> {
    let url = self.endpoint(&format!("gradcam/{layer}"));

    log::debug!("POST {url}");

    let form = Form::new()
      .part("image_input_file", file_part(image)?)
      .part("model_input_file", file_part(model)?)
      .text("selected_cnn_layer", layer.to_string());

    self
      .http
      .post(&url)
      .multipart(form)
      .send()?
      .error_for_status()?
      .json()
      .context("failed to parse grad-cam response")
  }

  pub(crate) fn rectangle_crop(&self, image: &Path) -> Result<CropResponse> {
    let url = self.endpoint("rectangle_crop");

    log::debug!("POST {url}");

    let form = Form::new().part("file", file_part(image)?);

    self
      .http
      .post(&url)
      .multipart(form)
      .send()?
      .error_for_status()?
      .json()
      .context("failed to parse crop response")
  }
}

fn file_part(path: &Path) -> Result<Part> {
  let bytes = fs::read(path)
    .with_context(|| format!("failed to read {}", path.display()))?;

  let name = path
    .file_name()
    .and_then(OsStr::to_str)
    .unwrap_or("upload")
    .to_string();

  Ok(Part::bytes(bytes).file_name(name))
}
