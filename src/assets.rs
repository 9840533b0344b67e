use std::path::Path;

use serde::Serialize;

/// Exploratory-analysis images shipped next to the model, by display title.
pub const EDA_IMAGES: [(&str, &str); 3] = [
    ("Distribution Plots", "eda_distribution_plots.png"),
    ("Categorical Satisfaction", "categorical_satisfaction.png"),
    ("Correlation Heatmap", "correlation_heatmap.png"),
];

/// Written findings from the exploratory analysis, by topic.
pub const EDA_SUMMARY: [(&str, &str); 7] = [
    (
        "Age Distribution",
        "The majority of passengers are between 25 and 50 years old, with some younger and older outliers.",
    ),
    (
        "Flight Distance",
        "Most flights are short to medium range (under 2000 km), but a few long-haul flights are present.",
    ),
    (
        "Arrival Delay",
        "There is a long tail in delays: most flights are on time or slightly delayed, some are delayed over 400 minutes.",
    ),
    (
        "Satisfaction by Gender",
        "There is no strong gender bias in satisfaction levels.",
    ),
    (
        "Satisfaction by Customer Type",
        "Loyal customers are significantly more likely to be satisfied than disloyal ones.",
    ),
    (
        "Satisfaction by Type of Travel",
        "Business travelers tend to report higher satisfaction than personal travelers.",
    ),
    (
        "Correlation Heatmap",
        "Inflight entertainment, online boarding and seat comfort correlate strongly with satisfaction; \
         arrival and departure delay show weak or no correlation.",
    ),
];

pub const EDA_CONCLUSION: &str = "Service features such as cleanliness, entertainment and boarding \
     influence satisfaction more than delays or demographics.";

#[derive(Debug, Clone, Serialize)]
pub struct EdaFinding {
    pub topic: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EdaCatalogue {
    pub images: Vec<EdaImage>,
    pub summary: Vec<EdaFinding>,
    pub conclusion: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EdaImage {
    pub title: String,
    pub file: String,
    pub available: bool,
    /// URL path to fetch the image when it is available.
    pub url: Option<String>,
    pub warning: Option<String>,
}

/// Check which EDA images exist under `dir`. Missing images are reported,
/// never an error.
pub fn scan_eda_images(dir: &Path) -> Vec<EdaImage> {
    EDA_IMAGES
        .iter()
        .map(|(title, file)| {
            let available = dir.join(file).is_file();
            EdaImage {
                title: title.to_string(),
                file: file.to_string(),
                available,
                url: available.then(|| format!("/assets/{file}")),
                warning: (!available).then(|| format!("EDA image not found: `{file}`")),
            }
        })
        .collect()
}

/// Images found under `dir` together with the written summary.
pub fn eda_catalogue(dir: &Path) -> EdaCatalogue {
    EdaCatalogue {
        images: scan_eda_images(dir),
        summary: EDA_SUMMARY
            .iter()
            .map(|(topic, text)| EdaFinding {
                topic: topic.to_string(),
                text: text.to_string(),
            })
            .collect(),
        conclusion: EDA_CONCLUSION.to_string(),
    }
}

/// Log a warning for every missing EDA image.
pub fn warn_missing(dir: &Path) {
    for image in scan_eda_images(dir).iter().filter(|i| !i.available) {
        tracing::warn!(
            file = %image.file,
            dir = %dir.display(),
            "EDA image not found; it will be omitted"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_reports_missing_and_present() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("correlation_heatmap.png"), b"png").unwrap();

        let images = scan_eda_images(dir.path());
        assert_eq!(images.len(), 3);

        let heatmap = images.iter().find(|i| i.title == "Correlation Heatmap").unwrap();
        assert!(heatmap.available);
        assert_eq!(heatmap.url.as_deref(), Some("/assets/correlation_heatmap.png"));
        assert!(heatmap.warning.is_none());

        let missing: Vec<_> = images.iter().filter(|i| !i.available).collect();
        assert_eq!(missing.len(), 2);
        assert!(missing
            .iter()
            .all(|i| i.warning.as_deref().unwrap().contains(&i.file)));
    }

    #[test]
    fn test_catalogue_carries_summary_without_images() {
        let dir = tempfile::tempdir().unwrap();

        let catalogue = eda_catalogue(dir.path());
        assert!(catalogue.images.iter().all(|i| !i.available));
        assert_eq!(catalogue.summary.len(), EDA_SUMMARY.len());
        assert_eq!(catalogue.summary[0].topic, "Age Distribution");
        assert!(catalogue.summary[0].text.contains("25 and 50"));
        assert!(!catalogue.conclusion.is_empty());
    }
}
