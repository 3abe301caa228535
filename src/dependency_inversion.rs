//! Dependency Inversion: business logic depends on an abstraction it owns,
//! and the low-level details implement that abstraction.
//!
//! [`ReportService`] never names a concrete generator. Swapping PDF for HTML
//! is a change at the construction site only.

use crate::config::DemoConfig;
use crate::console::Console;

/// Declared next to the code that consumes it, not next to the generators.
pub trait ReportGenerator {
    fn name(&self) -> &str;

    fn generate(&self, content: &str, out: &mut dyn Console);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PdfGenerator;

impl ReportGenerator for PdfGenerator {
    fn name(&self) -> &str {
        "PdfGenerator"
    }

    fn generate(&self, content: &str, out: &mut dyn Console) {
        out.emit(self.name(), &format!("Generating PDF with content: {content}"));
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlGenerator;

impl ReportGenerator for HtmlGenerator {
    fn name(&self) -> &str {
        "HtmlGenerator"
    }

    fn generate(&self, content: &str, out: &mut dyn Console) {
        out.emit(self.name(), &format!("Generating HTML with content: {content}"));
    }
}

pub struct ReportService {
    generator: Box<dyn ReportGenerator>,
    content: String,
}

impl ReportService {
    pub fn new(generator: Box<dyn ReportGenerator>, content: impl Into<String>) -> Self {
        Self {
            generator,
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn create_report(&self, out: &mut dyn Console) {
        tracing::debug!(generator = self.generator.name(), "creating report");
        self.generator.generate(&self.content, out);
    }
}

pub fn demo(config: &DemoConfig, out: &mut dyn Console) {
    let content = config.report.content.as_str();

    ReportService::new(Box::new(PdfGenerator), content).create_report(out);
    ReportService::new(Box::new(HtmlGenerator), content).create_report(out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Transcript;

    #[test]
    fn test_pdf_report() {
        let service = ReportService::new(Box::new(PdfGenerator), "Annual Financial Report");
        let mut out = Transcript::new();
        service.create_report(&mut out);

        assert_eq!(
            out.texts(),
            vec!["Generating PDF with content: Annual Financial Report"]
        );
    }

    #[test]
    fn test_generator_can_be_swapped() {
        struct CsvGenerator;

        impl ReportGenerator for CsvGenerator {
            fn name(&self) -> &str {
                "CsvGenerator"
            }

            fn generate(&self, content: &str, out: &mut dyn Console) {
                out.emit(self.name(), &format!("Generating CSV with content: {content}"));
            }
        }

        let mut out = Transcript::new();
        for generator in [
            Box::new(HtmlGenerator) as Box<dyn ReportGenerator>,
            Box::new(CsvGenerator),
        ] {
            ReportService::new(generator, "Q4").create_report(&mut out);
        }

        assert_eq!(
            out.texts(),
            vec![
                "Generating HTML with content: Q4",
                "Generating CSV with content: Q4",
            ]
        );
        assert_eq!(out.origins(), vec!["HtmlGenerator", "CsvGenerator"]);
    }

    #[test]
    fn test_demo_uses_configured_content() {
        let mut config = DemoConfig::default();
        config.report.content = "Board Summary".to_string();

        let mut out = Transcript::new();
        demo(&config, &mut out);

        assert_eq!(out.len(), 2);
        assert!(out.texts().iter().all(|t| t.ends_with("Board Summary")));
    }
}
