/// Net monthly balance and its surplus/deficit classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Balance {
    pub balance: f64,
    /// Zero counts as surplus.
    pub is_surplus: bool,
}

pub fn compute_balance(total_assets: f64, total_liabilities: f64) -> Balance {
    let balance = total_assets - total_liabilities;
    Balance {
        balance,
        is_surplus: balance >= 0.0,
    }
}
