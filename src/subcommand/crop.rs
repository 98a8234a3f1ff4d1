use super::*;

#[derive(Debug, Parser)]
pub(crate) struct Crop {
  #[clap(short, long, help = "Image to crop")]
  image: PathBuf,
  #[clap(short, long, default_value = "crop.png")]
  output: PathBuf,
}

impl Crop {
  pub(crate) fn run(self, client: Client) -> Result {
    let response = client.rectangle_crop(&self.image)?;

    let cropped = response.image()?;

    cropped
      .save(&self.output)
      .with_context(|| format!("failed to write {}", self.output.display()))?;

    println!("Saved cropped image to {}", self.output.display());

    Ok(())
  }
}
