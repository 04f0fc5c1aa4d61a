use clap::Parser;

/// Ranks the rows of a decision table with the TOPSIS method
/// (Technique for Order Preference by Similarity to Ideal Solution).
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path) The decision table. CSV and Excel (.xlsx, .xls) files are
    /// supported. The first row is the header, the first column identifies
    /// each alternative and every following column is a numeric criterion.
    #[clap(value_parser)]
    pub input: String,

    /// Comma-separated criterion weights, for example "1,2,1".
    // Negative weights start with a hyphen and would otherwise be read as flags.
    #[clap(value_parser, allow_hyphen_values = true)]
    pub weights: String,

    /// Comma-separated impact directions, "+" (benefit) or "-" (cost) for
    /// each criterion, for example "+,+,-".
    #[clap(value_parser, allow_hyphen_values = true)]
    pub impacts: String,

    /// (file path) Where the ranked table is written, in CSV format.
    #[clap(value_parser)]
    pub output: String,
}
