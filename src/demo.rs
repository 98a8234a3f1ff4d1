use super::*;

#[derive(Debug, Default)]
pub(crate) struct Demo {
  pub(crate) models: Vec<PathBuf>,
  pub(crate) images: Vec<PathBuf>,
}

impl Demo {
  pub(crate) fn scan(dir: &Path) -> Result<Self> {
    let mut demo = Self::default();

    let entries = fs::read_dir(dir)
      .with_context(|| format!("failed to read demo directory {}", dir.display()))?;

    for entry in entries {
      let path = entry?.path();

      if !path.is_file() {
        continue;
      }

      let extension = path
        .extension()
        .and_then(OsStr::to_str)
        .map(str::to_lowercase);

      match extension.as_deref() {
        Some("h5") => demo.models.push(path),
        Some("jpg" | "jpeg" | "png") => demo.images.push(path),
        _ => {}
      }
    }

    demo.models.sort();
    demo.images.sort();

    Ok(demo)
  }
}

#[cfg(test)]
mod tests {
  use {super::*, tempdir::TempDir};

  #[test]
  fn scan_partitions_models_and_images() {
    let dir = TempDir::new("demo").unwrap();

    for name in ["vgg16.h5", "cat.jpg", "Dog.PNG", "scan.jpeg", "notes.txt"] {
      fs::write(dir.path().join(name), "stub").unwrap();
    }

    fs::create_dir(dir.path().join("nested.png")).unwrap();

    let demo = Demo::scan(dir.path()).unwrap();

    assert_eq!(demo.models, [dir.path().join("vgg16.h5")]);

    assert_eq!(
      demo.images,
      [
        dir.path().join("Dog.PNG"),
        dir.path().join("cat.jpg"),
        dir.path().join("scan.jpeg"),
      ]
    );
  }

  #[test]
  fn scan_accepts_empty_directory() {
    let dir = TempDir::new("demo").unwrap();

    let demo = Demo::scan(dir.path()).unwrap();

    assert!(demo.models.is_empty());
    assert!(demo.images.is_empty());
  }

  #[test]
  fn scan_missing_directory_names_path() {
    let error = Demo::scan(Path::new("no/such/demos")).unwrap_err();

    assert!(error.to_string().contains("no/such/demos"));
  }
}
