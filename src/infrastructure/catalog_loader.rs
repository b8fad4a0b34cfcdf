use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};

use crate::domain::product::Catalog;

/// Read a product catalog from a JSON array file.
///
/// A missing file is not an error: the storefront starts with an empty
/// catalog and the carousel falls back to its placeholder slides.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!("Catalog not found at {}, starting empty", path.display());
            return Ok(Catalog::default());
        }
        Err(e) => {
            return Err(e).wrap_err_with(|| format!("Failed to read catalog {}", path.display()))
        }
    };

    let catalog = Catalog::from_json(&json)
        .wrap_err_with(|| format!("Failed to parse catalog {}", path.display()))?;
    tracing::info!(
        "Loaded {} products ({} visible) from {}",
        catalog.len(),
        catalog.visible().count(),
        path.display()
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::*;

    fn temp_file(name: &str, contents: &str) -> Result<PathBuf> {
        let path = std::env::temp_dir().join(format!(
            "storefront-catalog-{name}-{}.json",
            std::process::id()
        ));
        fs::write(&path, contents)?;
        Ok(path)
    }

    #[test]
    fn test_missing_file_yields_empty_catalog() -> Result<()> {
        let path = std::env::temp_dir().join("storefront-catalog-does-not-exist.json");
        let catalog = load_catalog(&path)?;
        assert!(catalog.is_empty());
        Ok(())
    }

    #[test]
    fn test_loads_products() -> Result<()> {
        let path = temp_file(
            "ok",
            r#"[
                { "id": "1", "title": "Lamp", "price": 20.0 },
                { "id": "2", "title": "Desk", "price": 150.0, "deleted": true }
            ]"#,
        )?;
        let catalog = load_catalog(&path)?;
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.visible().count(), 1);
        fs::remove_file(path)?;
        Ok(())
    }

    #[test]
    fn test_loads_api_shaped_records() -> Result<()> {
        let path = temp_file(
            "api",
            r#"[{ "id": 1, "title": "Phone", "price": 400, "discountPercentage": 12.5 }]"#,
        )?;
        let catalog = load_catalog(&path)?;
        let product = catalog.find("1").expect("numeric id is kept as text");
        assert_eq!(product.discount_percentage, 12.5);
        assert_eq!(product.discounted_price(), 350.0);
        fs::remove_file(path)?;
        Ok(())
    }

    #[test]
    fn test_malformed_json_reports_path() -> Result<()> {
        let path = temp_file("bad", "{ not json")?;
        let err = load_catalog(&path).expect_err("malformed catalog must fail");
        assert!(format!("{err:#}").contains("Failed to parse catalog"));
        fs::remove_file(path)?;
        Ok(())
    }
}
