use sourcescope_operations::operations::ImpactOutput;

pub(crate) trait ReportFormatter {
    fn format_report(&self, output: &ImpactOutput) -> String;
    fn format_root_folders(&self, output: &ImpactOutput) -> String;
}
