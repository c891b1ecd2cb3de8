//! Running state carried between projection periods

/// Number of periods between support income being earned and it becoming
/// available for reinvestment
pub const SUPPORT_SETTLEMENT_LAG_PERIODS: usize = 4;

/// State at the start of a period
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Current period (0-indexed)
    pub period: usize,

    /// Capital base for this period's ROI and support
    pub base: f64,

    /// Support earned in each completed period, oldest first
    pub support_history: Vec<f64>,

    /// Withdrawals taken through the previous period
    pub cumulative_withdrawn: f64,

    /// Whether the capital base has gone negative at some point
    pub negative_base_seen: bool,
}

impl ProjectionState {
    /// Initialize state for period 0
    pub fn new(initial_investment: f64, periods: usize) -> Self {
        Self {
            period: 0,
            base: initial_investment,
            support_history: Vec::with_capacity(periods),
            cumulative_withdrawn: 0.0,
            negative_base_seen: false,
        }
    }

    /// Support earned `SUPPORT_SETTLEMENT_LAG_PERIODS` ago, if that period exists
    pub fn settled_support(&self) -> Option<f64> {
        self.period
            .checked_sub(SUPPORT_SETTLEMENT_LAG_PERIODS)
            .and_then(|earned_in| self.support_history.get(earned_in))
            .copied()
    }

    /// Roll forward: the period's reinvested amount becomes the next base
    pub fn advance(&mut self, support: f64, reinvested: f64, cumulative_withdrawn: f64) {
        self.support_history.push(support);
        self.cumulative_withdrawn = cumulative_withdrawn;
        self.base = reinvested;
        self.period += 1;
    }
}
