//! Reading sightings from a file or a URL.

use anyhow::Context;
use log::info;
use ufo_data::Dataset;

/// Whether `src` should be fetched over HTTP rather than read from disk.
pub fn is_url(src: &str) -> bool {
    src.starts_with("http://") || src.starts_with("https://")
}

/// Read the raw CSV text behind `src`.
pub async fn read_source(src: &str) -> anyhow::Result<String> {
    if is_url(src) {
        info!("[UFO] source: fetching {}", src);
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()?;
        let response = client
            .get(src)
            .send()
            .await
            .with_context(|| format!("failed to fetch {}", src))?
            .error_for_status()
            .with_context(|| format!("bad response from {}", src))?;
        Ok(response.text().await?)
    } else {
        tokio::fs::read_to_string(src)
            .await
            .with_context(|| format!("failed to read {}", src))
    }
}

/// Read and parse `src` into a dataset.
pub async fn load_dataset(src: &str) -> anyhow::Result<Dataset> {
    let text = read_source(src).await?;
    let dataset =
        Dataset::from_csv_str(&text).with_context(|| format!("failed to parse {}", src))?;
    info!("[UFO] source: {} sightings from {}", dataset.len(), src);
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn url_detection() {
        assert!(is_url("https://example.com/ufo_us.csv"));
        assert!(is_url("http://localhost:8080/data.csv"));
        assert!(!is_url("fixtures/ufo_us.csv"));
        assert!(!is_url("/tmp/http.csv"));
    }

    #[tokio::test]
    async fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "datetime,state,shape,duration (seconds),comments,latitude,longitude\n\
             6/1/1999 21:00,CA,disk,300,First,34.05,-118.24\n"
        )
        .unwrap();
        let ds = load_dataset(file.path().to_str().unwrap()).await.unwrap();
        assert_eq!(ds.len(), 1);
    }

    #[tokio::test]
    async fn missing_file_names_the_path() {
        let err = load_dataset("/nonexistent/ufo.csv").await.unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/ufo.csv"));
    }
}
