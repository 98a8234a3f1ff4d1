use super::*;

#[derive(Debug, Parser)]
pub(crate) struct Gradcam {
  #[clap(short, long, help = "Trained model file to upload")]
  model: PathBuf,
  #[clap(short, long, help = "Image to inspect")]
  image: PathBuf,
  #[clap(short, long, help = "CNN layer to visualize, defaults to the last")]
  layer: Option<String>,
  #[clap(short, long, default_value = "gradcam.png")]
  output: PathBuf,
}

impl Gradcam {
  pub(crate) fn run(self, client: Client) -> Result {
    let spinner = ProgressBar::new_spinner();

    spinner.set_style(
      ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?,
    );

    spinner.enable_steady_tick(Duration::from_millis(80));

    spinner.set_message("uploading model");

    let info = client.load_model(&self.model)?;

    let layer = match self.layer {
      Some(layer) => {
        if !info.cnn_layers.contains(&layer) {
          spinner.finish_and_clear();

          bail!(
            "unknown cnn layer `{layer}`, model has: {}",
            info.cnn_layers.join(", ")
          );
        }

        layer
      }
      None => info
        .cnn_layers
        .last()
        .cloned()
        .ok_or_else(|| anyhow!("model has no convolutional layers"))?,
    };

    spinner.set_message(format!("computing grad-cam for {layer}"));

    let response = client.gradcam(&layer, &self.image, &self.model)?;

    spinner.finish_and_clear();

    let (input, result) = response.images()?;

    let figure = compose(&input.to_rgb8(), &heatmap_panel(&result));

    figure
      .save(&self.output)
      .with_context(|| format!("failed to write {}", self.output.display()))?;

    println!("Input layer: {}", info.input_layer);
    println!(
      "Expected input shape (height, width, channels): {:?}",
      info.input_shape
    );
    println!("Original image: {}", self.image.display());
    println!("Grad-CAM layer: {layer}");
    println!("Saved figure to {}", self.output.display());

    Ok(())
  }
}
