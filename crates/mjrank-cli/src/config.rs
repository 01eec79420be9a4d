use mjrank_analysis::{cutoff::CutoffRule, export::ExportOptions};
use mjrank_stats::scoring::ScoringRule;
use serde::{Deserialize, Serialize};

/// Tournament-wide settings read from the `--config` file.
///
/// Every section is optional; missing sections and fields take their
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub(crate) struct TournamentConfig {
    pub cutoff: CutoffRule,
    pub scoring: ScoringRule,
    pub export: ExportOptions,
}
