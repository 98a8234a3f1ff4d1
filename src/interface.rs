use super::*;

pub(crate) struct Interface {
  client: Client,
  demo: Option<Demo>,
  model_path: String,
  image_path: String,
  model: Option<ModelInfo>,
  selected_layer: Option<String>,
  panels: Option<Panels>,
  status: Option<Status>,
}

struct Panels {
  title: String,
  input: TextureHandle,
  result: TextureHandle,
}

enum Status {
  Success(String),
  Error(String),
}

impl eframe::App for Interface {
  fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
    egui::CentralPanel::default().show(ctx, |ui| {
      egui::ScrollArea::vertical().show(ui, |ui| self.ui(ui));
    });
  }
}

impl Interface {
  pub(crate) fn new(client: Client, demo: Option<Demo>) -> Self {
    Self {
      client,
      demo,
      model_path: String::new(),
      image_path: String::new(),
      model: None,
      selected_layer: None,
      panels: None,
      status: None,
    }
  }

  fn load_model(&mut self) {
    self.panels = None;

    match self.client.load_model(Path::new(&self.model_path)) {
      Ok(model) => {
        self.selected_layer = model.cnn_layers.last().cloned();
        self.model = Some(model);
        self.status = Some(Status::Success("Load model success.".into()));
      }
      Err(error) => {
        log::error!("load model failed: {error:#}");
        self.model = None;
        self.selected_layer = None;
        self.status = Some(Status::Error(
          "Load model failed. Please re-check your file path!".into(),
        ));
      }
    }
  }

  fn run_gradcam(&mut self, ctx: &egui::Context) {
    let Some(layer) = self.selected_layer.clone() else {
      return;
    };

    match self.try_gradcam(&layer, ctx) {
      Ok(panels) => {
        self.panels = Some(panels);
        self.status = Some(Status::Success("Grad-CAM complete.".into()));
      }
      Err(error) => {
        self.panels = None;
        self.status = Some(Status::Error(error.to_string()));
      }
    }
  }

  fn try_gradcam(&self, layer: &str, ctx: &egui::Context) -> Result<Panels> {
    let image_path = Path::new(&self.image_path);

    let response =
      self
        .client
        .gradcam(layer, image_path, Path::new(&self.model_path))?;

    let (input, result) = response.images()?;

    Ok(Panels {
      title: format!(
        "Original image: {}",
        image_path
          .file_name()
          .and_then(OsStr::to_str)
          .unwrap_or(&self.image_path),
      ),
      input: load_texture(ctx, "input", &input.to_rgb8()),
      result: load_texture(ctx, "gradcam", &heatmap_panel(&result)),
    })
  }

  pub(crate) fn ui(&mut self, ui: &mut egui::Ui) {
    ui.heading("Grad-CAM Visualization");
    ui.label("To visualize where the model is focusing.");
    ui.separator();

    let demo_models = self
      .demo
      .as_ref()
      .map(|demo| demo.models.clone())
      .unwrap_or_default();

    let demo_images = self
      .demo
      .as_ref()
      .map(|demo| demo.images.clone())
      .unwrap_or_default();

    ui.horizontal(|ui| {
      ui.label("Model (.h5)");
      ui.text_edit_singleline(&mut self.model_path);

      demo_picker(ui, "demo-models", &demo_models, &mut self.model_path);

      if ui.button("Load model").clicked() {
        self.load_model();
      }
    });

    if let Some(model) = self.model.clone() {
      ui.label(format!("Input layer: {}", model.input_layer));

      ui.label(format!(
        "Please input an image with size (height, width, channels) = {:?}",
        model.input_shape,
      ));

      ui.horizontal(|ui| {
        ui.label("Image");
        ui.text_edit_singleline(&mut self.image_path);

        demo_picker(ui, "demo-images", &demo_images, &mut self.image_path);
      });

      ComboBox::from_label("CNN layer")
        .selected_text(
          self
            .selected_layer
            .clone()
            .unwrap_or_else(|| "select a layer".into()),
        )
        .show_ui(ui, |ui| {
          for layer in &model.cnn_layers {
            ui.selectable_value(
              &mut self.selected_layer,
              Some(layer.clone()),
              layer,
            );
          }
        });

      if ui.button("Run Grad-CAM").clicked() && !self.image_path.is_empty() {
        let ctx = ui.ctx().clone();
        self.run_gradcam(&ctx);
      }
    }

    if let Some(status) = &self.status {
      match status {
        Status::Success(message) => {
          ui.colored_label(Color32::LIGHT_GREEN, message.as_str())
        }
        Status::Error(message) => {
          ui.colored_label(Color32::LIGHT_RED, message.as_str())
        }
      };
    }

    if let Some(panels) = &self.panels {
      ui.separator();

      ui.horizontal(|ui| {
        ui.vertical(|ui| {
          ui.label(panels.title.as_str());

          ui.add(
            egui::Image::new(&panels.input).max_size(Vec2::new(440.0, 440.0)),
          );
        });

        ui.vertical(|ui| {
          ui.label("Grad-CAM");

          ui.add(
            egui::Image::new(&panels.result).max_size(Vec2::new(440.0, 440.0)),
          );
        });

        colorbar(ui);
      });
    }
  }
}

fn demo_picker(
  ui: &mut egui::Ui,
  id: &str,
  paths: &[PathBuf],
  target: &mut String,
) {
  if paths.is_empty() {
    return;
  }

  ComboBox::from_id_source(id)
    .selected_text("demos")
    .show_ui(ui, |ui| {
      for path in paths {
        let name = path.file_name().and_then(OsStr::to_str).unwrap_or_default();

        if ui
          .selectable_label(*target == path.to_string_lossy(), name)
          .clicked()
        {
          *target = path.to_string_lossy().into_owned();
        }
      }
    });
}

fn colorbar(ui: &mut egui::Ui) {
  ui.vertical(|ui| {
    ui.label("high");

    let (response, painter) =
      ui.allocate_painter(Vec2::new(18.0, 256.0), Sense::hover());

    let rect = response.rect;

    let steps = 64;

    for step in 0..steps {
      let t0 = step as f32 / steps as f32;
      let t1 = (step + 1) as f32 / steps as f32;

      let color = heat(1.0 - ((t0 + t1) / 2.0) as f64);

      painter.rect_filled(
        Rect::from_min_max(
          Pos2::new(rect.left(), rect.top() + t0 * rect.height()),
          Pos2::new(rect.right(), rect.top() + t1 * rect.height()),
        ),
        0.0,
        Color32::from_rgb(color[0], color[1], color[2]),
      );
    }

    ui.label("low");
  });
}

fn load_texture(
  ctx: &egui::Context,
  name: &str,
  image: &RgbImage,
) -> TextureHandle {
  let size = [image.width() as usize, image.height() as usize];

  ctx.load_texture(
    name,
    ColorImage::from_rgb(size, image.as_raw()),
    TextureOptions::LINEAR,
  )
}
