// Output formatting and styling

use colored::Colorize;
use solarscan_core::roi::INCENTIVE_RATE;
use solarscan_core::{RoiProjection, RoofAttributes, RooftopAnalysis};

/// Reminder printed under every recommendation
pub const COMPLIANCE_NOTE: &str =
    "Ensure compliance with local building codes and net metering policies.";

/// Output styling configuration
pub struct OutputStyle {
    pub use_colors: bool,
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}

impl OutputStyle {
    /// Style without ANSI colors
    pub fn plain() -> Self {
        Self { use_colors: false }
    }

    /// Format success message
    pub fn success(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "✓".green().bold(), msg)
        } else {
            format!("✓ {}", msg)
        }
    }

    /// Format error message
    pub fn error(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "✗".red().bold(), msg)
        } else {
            format!("✗ {}", msg)
        }
    }

    /// Format section header
    pub fn header(&self, title: &str) -> String {
        if self.use_colors {
            title.bold().underline().to_string()
        } else {
            title.to_string()
        }
    }

    /// Format a label/value row
    pub fn row(&self, label: &str, value: &str) -> String {
        let label = format!("{:<22}", format!("{}:", label));
        if self.use_colors {
            format!("  {}{}", label.dimmed(), value)
        } else {
            format!("  {}{}", label, value)
        }
    }
}

/// Print an error message to stderr
pub fn print_error(msg: &str) {
    eprintln!("{}", OutputStyle::default().error(msg));
}

/// Render the extracted roof attributes.
pub fn render_attributes(style: &OutputStyle, attributes: &RoofAttributes) -> String {
    [
        style.header("Analysis Results"),
        style.row("Roof Area", &format!("{:.2} m²", attributes.roof_area_sqm)),
        style.row("Azimuth", &format!("{:.1}°", attributes.azimuth_degrees)),
        style.row("Tilt", &format!("{:.1}°", attributes.tilt_degrees)),
        style.row("Shading", &format!("{:.1}%", attributes.shading_percentage)),
        style.row(
            "Estimated Yield",
            &format!("{:.2} kWh/year", attributes.estimated_annual_kwh),
        ),
    ]
    .join("\n")
}

/// Render an ROI projection; infinite payback shows as "N/A".
pub fn render_projection(style: &OutputStyle, projection: &RoiProjection) -> String {
    let incentive_label = format!("Incentive ({:.0}%)", INCENTIVE_RATE * 100.0);
    [
        style.header("ROI Estimates"),
        style.row("Total System Size", &format!("{:.2} W", projection.total_watts)),
        style.row(
            "Installation Cost",
            &format!("${:.2}", projection.installation_cost),
        ),
        style.row(&incentive_label, &format!("${:.2}", projection.incentive)),
        style.row("Net Cost", &format!("${:.2}", projection.net_cost)),
        style.row(
            "Annual Savings",
            &format!("${:.2}", projection.annual_savings),
        ),
        style.row("Payback Period", &projection.payback_display()),
    ]
    .join("\n")
}

/// Render the recommendation block.
pub fn render_recommendations(style: &OutputStyle, attributes: &RoofAttributes) -> String {
    [
        style.header("Recommendations"),
        style.row("Suggested Panel Type", &attributes.suggested_panel_type),
        format!("  {}", COMPLIANCE_NOTE),
    ]
    .join("\n")
}

/// Render the full human-readable report.
pub fn render_analysis(style: &OutputStyle, analysis: &RooftopAnalysis) -> String {
    [
        render_attributes(style, &analysis.attributes),
        render_projection(style, &analysis.projection),
        render_recommendations(style, &analysis.attributes),
    ]
    .join("\n\n")
}
