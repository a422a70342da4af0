//! FeatureVector and per-field input bounds

use serde::{Deserialize, Serialize};

/// Classifier column names, in schema order.
pub const FEATURE_NAMES: [&str; 5] = [
    "ExternalRiskEstimate",
    "NumInqLast6M",
    "NetFractionRevolvingBurden",
    "NumSatisfactoryTrades",
    "AverageMInFile",
];

/// Input bounds and form metadata for one feature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureBounds {
    /// Classifier column name
    pub name: &'static str,
    /// Form label
    pub label: &'static str,
    /// Inclusive lower bound
    pub min: f64,
    /// Inclusive upper bound
    pub max: f64,
    /// Value the entry form starts with
    pub default: f64,
}

impl FeatureBounds {
    /// All five bounds, in schema order.
    pub const ALL: [FeatureBounds; 5] = [
        FeatureBounds {
            name: "ExternalRiskEstimate",
            label: "External Risk Estimate",
            min: 0.0,
            max: 100.0,
            default: 50.0,
        },
        FeatureBounds {
            name: "NumInqLast6M",
            label: "Inquiries (Last 6 Months)",
            min: 0.0,
            max: 100.0,
            default: 1.0,
        },
        FeatureBounds {
            name: "NetFractionRevolvingBurden",
            label: "Revolving Utilization Ratio",
            min: 0.0,
            max: 300.0,
            default: 50.0,
        },
        FeatureBounds {
            name: "NumSatisfactoryTrades",
            label: "Satisfactory Trades",
            min: 0.0,
            max: 200.0,
            default: 10.0,
        },
        FeatureBounds {
            name: "AverageMInFile",
            label: "Average Months in File",
            min: 0.0,
            max: 600.0,
            default: 100.0,
        },
    ];

    /// Clamp a value into `[min, max]`. NaN falls back to the form default.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.default;
        }
        value.clamp(self.min, self.max)
    }

    /// Whether the value lies inside the bounds.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// One applicant's screening input.
///
/// Field names serialize as the classifier's column names. Values are not
/// range-checked on construction; use [`FeatureVector::clamped`] to apply
/// the form bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeatureVector {
    #[serde(rename = "ExternalRiskEstimate")]
    external_risk_estimate: f64,
    #[serde(rename = "NumInqLast6M")]
    num_inq_last_6m: f64,
    #[serde(rename = "NetFractionRevolvingBurden")]
    net_fraction_revolving_burden: f64,
    #[serde(rename = "NumSatisfactoryTrades")]
    num_satisfactory_trades: f64,
    #[serde(rename = "AverageMInFile")]
    average_m_in_file: f64,
}

impl FeatureVector {
    /// Build a vector from values in schema order.
    pub fn new(
        external_risk_estimate: f64,
        num_inq_last_6m: f64,
        net_fraction_revolving_burden: f64,
        num_satisfactory_trades: f64,
        average_m_in_file: f64,
    ) -> Self {
        Self {
            external_risk_estimate,
            num_inq_last_6m,
            net_fraction_revolving_burden,
            num_satisfactory_trades,
            average_m_in_file,
        }
    }

    /// Build a vector from a schema-ordered array.
    pub fn from_array(values: [f64; 5]) -> Self {
        Self::new(values[0], values[1], values[2], values[3], values[4])
    }

    /// The entry form's starting values.
    pub fn form_defaults() -> Self {
        let mut values = [0.0; 5];
        for (slot, bounds) in values.iter_mut().zip(FeatureBounds::ALL.iter()) {
            *slot = bounds.default;
        }
        Self::from_array(values)
    }

    /// Copy of this vector with every field clamped into its bounds.
    pub fn clamped(&self) -> Self {
        let mut values = self.to_array();
        for (value, bounds) in values.iter_mut().zip(FeatureBounds::ALL.iter()) {
            *value = bounds.clamp(*value);
        }
        Self::from_array(values)
    }

    /// Names of fields whose values fall outside the form bounds.
    pub fn out_of_bounds(&self) -> Vec<&'static str> {
        self.to_array()
            .iter()
            .zip(FeatureBounds::ALL.iter())
            .filter(|(value, bounds)| !bounds.contains(**value))
            .map(|(_, bounds)| bounds.name)
            .collect()
    }

    /// Values in schema order.
    pub fn to_array(&self) -> [f64; 5] {
        [
            self.external_risk_estimate,
            self.num_inq_last_6m,
            self.net_fraction_revolving_burden,
            self.num_satisfactory_trades,
            self.average_m_in_file,
        ]
    }

    /// `(column name, value)` pairs in schema order.
    pub fn columns(&self) -> [(&'static str, f64); 5] {
        let values = self.to_array();
        [
            (FEATURE_NAMES[0], values[0]),
            (FEATURE_NAMES[1], values[1]),
            (FEATURE_NAMES[2], values[2]),
            (FEATURE_NAMES[3], values[3]),
            (FEATURE_NAMES[4], values[4]),
        ]
    }

    pub fn external_risk_estimate(&self) -> f64 {
        self.external_risk_estimate
    }

    pub fn num_inq_last_6m(&self) -> f64 {
        self.num_inq_last_6m
    }

    pub fn net_fraction_revolving_burden(&self) -> f64 {
        self.net_fraction_revolving_burden
    }

    pub fn num_satisfactory_trades(&self) -> f64 {
        self.num_satisfactory_trades
    }

    pub fn average_m_in_file(&self) -> f64 {
        self.average_m_in_file
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self::form_defaults()
    }
}
