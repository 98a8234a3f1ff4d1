use {super::*, app::App, crop::Crop, gradcam::Gradcam, info::Info};

mod app;
mod crop;
mod gradcam;
mod info;

#[derive(Debug, Parser)]
pub(crate) enum Subcommand {
  #[clap(name = "app", about = "Run an interactive GUI application")]
  App(App),
  #[clap(name = "crop", about = "Crop an image to its annotated rectangle")]
  Crop(Crop),
  #[clap(name = "gradcam", about = "Render a Grad-CAM heat-map figure")]
  Gradcam(Gradcam),
  #[clap(name = "info", about = "Show information about the service")]
  Info(Info),
}

impl Subcommand {
  pub(crate) fn run(self, client: Client) -> Result {
    match self {
      Self::App(app) => app.run(client),
      Self::Crop(crop) => crop.run(client),
      Self::Gradcam(gradcam) => gradcam.run(client),
      Self::Info(info) => info.run(client),
    }
  }
}
