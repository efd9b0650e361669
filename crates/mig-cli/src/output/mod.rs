pub mod table;

use mig_report::Report;

use crate::cli::GlobalFlags;

/// Print the per-section summary unless running quiet.
pub fn print_summary(report: &Report, flags: GlobalFlags) {
    if flags.quiet {
        return;
    }
    println!("{}", table::render_summary_table(report));
}
