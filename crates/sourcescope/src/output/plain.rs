use sourcescope_core::{Package, PackageSet};
use sourcescope_operations::operations::ImpactOutput;

use super::ReportFormatter;

const ROOT_DISPLAY: &str = ".";

pub(crate) struct PlainTextFormatter {
    verbose: bool,
}

impl PlainTextFormatter {
    pub(crate) fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn format_section<'a, I>(output: &mut String, title: &str, items: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(&format!("{title}:\n"));
        for item in items {
            output.push_str(&format!("  {item}\n"));
        }
    }

    fn package_names(packages: &PackageSet) -> impl Iterator<Item = &str> {
        packages.iter().map(Package::display_name)
    }

    fn folder_name(folder: &str) -> &str {
        if folder.is_empty() { ROOT_DISPLAY } else { folder }
    }
}

impl ReportFormatter for PlainTextFormatter {
    fn format_report(&self, result: &ImpactOutput) -> String {
        let mut output = String::new();

        if self.verbose {
            let files: Vec<String> = result
                .changed_files
                .iter()
                .map(|file| file.display().to_string())
                .collect();
            Self::format_section(&mut output, "changed files", files.iter().map(String::as_str));
        }

        Self::format_section(
            &mut output,
            "changed packages",
            Self::package_names(&result.changed_packages),
        );
        Self::format_section(
            &mut output,
            "dependent packages",
            Self::package_names(&result.dependent_packages),
        );
        Self::format_section(
            &mut output,
            "dependent root folders",
            result
                .root_folders
                .iter()
                .map(|folder| Self::folder_name(folder)),
        );

        output
    }

    fn format_root_folders(&self, result: &ImpactOutput) -> String {
        result
            .root_folders
            .iter()
            .map(|folder| format!("{}\n", Self::folder_name(folder)))
            .collect()
    }
}
