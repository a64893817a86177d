//! The model-decisions catalog and validated decision sets.
//!
//! SUMMA configures its physics and numerics through a fixed set of
//! keyword decisions, each with a small list of allowed choices. The
//! catalog here mirrors the model's decision table so a bad keyword or
//! choice is caught when the set is built, not hours later when the
//! model binary rejects the settings file.

use crate::error::{SummaError, SummaResult};

/// One recognized model decision: its keyword, allowed choices, and a
/// short description used for the generated file's comment column.
#[derive(Debug, Clone, Copy)]
pub struct DecisionSpec {
    pub keyword: &'static str,
    pub choices: &'static [&'static str],
    pub description: &'static str,
}

/// The model's decision table (keyword, allowed choices, description).
///
/// Order follows the model's own decision listing; generated files keep
/// whatever order the caller inserted, this table is lookup only.
pub const CATALOG: &[DecisionSpec] = &[
    DecisionSpec { keyword: "soilCatTbl", choices: &["STAS", "STAS-RUC", "ROSETTA"], description: "soil-category dataset" },
    DecisionSpec { keyword: "vegeParTbl", choices: &["USGS", "MODIFIED_IGBP_MODIS_NOAH"], description: "vegetation-category dataset" },
    DecisionSpec { keyword: "soilStress", choices: &["NoahType", "CLM_Type", "SiB_Type"], description: "soil moisture stress function" },
    DecisionSpec { keyword: "stomResist", choices: &["BallBerry", "Jarvis", "simpleResistance"], description: "stomatal resistance scheme" },
    DecisionSpec { keyword: "num_method", choices: &["itertive", "non_iter", "itersurf"], description: "numerical method" },
    DecisionSpec { keyword: "fDerivMeth", choices: &["numericl", "analytic"], description: "flux derivative method" },
    DecisionSpec { keyword: "LAI_method", choices: &["monTable", "specified"], description: "leaf area index source" },
    DecisionSpec { keyword: "f_Richards", choices: &["moisture", "mixdform"], description: "form of Richards equation" },
    DecisionSpec { keyword: "groundwatr", choices: &["qTopmodl", "bigBuckt", "noXplict"], description: "groundwater parameterization" },
    DecisionSpec { keyword: "hc_profile", choices: &["constant", "pow_prof"], description: "hydraulic conductivity profile" },
    DecisionSpec { keyword: "bcUpprTdyn", choices: &["presTemp", "nrg_flux", "zeroFlux"], description: "upper thermodynamic boundary" },
    DecisionSpec { keyword: "bcLowrTdyn", choices: &["presTemp", "zeroFlux"], description: "lower thermodynamic boundary" },
    DecisionSpec { keyword: "bcUpprSoiH", choices: &["presHead", "liq_flux"], description: "upper soil hydrology boundary" },
    DecisionSpec { keyword: "bcLowrSoiH", choices: &["presHead", "bottmPsi", "drainage", "zeroFlux"], description: "lower soil hydrology boundary" },
    DecisionSpec { keyword: "veg_traits", choices: &["Raupach_BLM1994", "CM_QJRMS1988", "vegTypeTable"], description: "canopy dimension source" },
    DecisionSpec { keyword: "canopyEmis", choices: &["simplExp", "difTrans"], description: "canopy emissivity parameterization" },
    DecisionSpec { keyword: "snowIncept", choices: &["stickySnow", "lightSnow"], description: "canopy snow interception" },
    DecisionSpec { keyword: "windPrfile", choices: &["exponential", "logBelowCanopy"], description: "canopy wind profile" },
    DecisionSpec { keyword: "astability", choices: &["standard", "louisinv", "mahrtexp"], description: "atmospheric stability function" },
    DecisionSpec { keyword: "canopySrad", choices: &["noah_mp", "CLM_2stream", "UEB_2stream", "NL_scatter", "BeersLaw"], description: "canopy shortwave radiation" },
    DecisionSpec { keyword: "alb_method", choices: &["conDecay", "varDecay"], description: "snow albedo decay" },
    DecisionSpec { keyword: "compaction", choices: &["consettl", "anderson"], description: "snow compaction routine" },
    DecisionSpec { keyword: "snowLayers", choices: &["jrdn1991", "CLM_2010"], description: "snow layer combination/subdivision" },
    DecisionSpec { keyword: "thCondSnow", choices: &["tyen1965", "melr1977", "jrdn1991", "smnv2000"], description: "snow thermal conductivity" },
    DecisionSpec { keyword: "thCondSoil", choices: &["funcSoilWet", "mixConstit", "hanssonVZJ"], description: "soil thermal conductivity" },
    DecisionSpec { keyword: "spatial_gf", choices: &["localColumn", "singleBasin"], description: "groundwater spatial representation" },
    DecisionSpec { keyword: "subRouting", choices: &["timeDlay", "qInstant"], description: "sub-grid routing" },
];

/// Look up a decision keyword in the catalog.
pub fn recognized(keyword: &str) -> Option<&'static DecisionSpec> {
    CATALOG.iter().find(|spec| spec.keyword == keyword)
}

/// A validated set of model decisions.
///
/// Keys are unique; iteration order is insertion order so that two sets
/// built the same way emit byte-identical files. There is deliberately
/// no serde on this type: every entry must come through `insert`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecisionSet {
    entries: Vec<(String, String)>,
}

impl DecisionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a decision, validating keyword and choice against the catalog.
    ///
    /// Re-inserting a keyword replaces its previous choice in place.
    pub fn insert(&mut self, keyword: &str, choice: &str) -> SummaResult<()> {
        let spec =
            recognized(keyword).ok_or_else(|| SummaError::UnknownDecision(keyword.to_string()))?;
        if !spec.choices.contains(&choice) {
            return Err(SummaError::InvalidChoice {
                decision: keyword.to_string(),
                choice: choice.to_string(),
                allowed: spec.choices.join(", "),
            });
        }
        match self.entries.iter_mut().find(|(k, _)| k == keyword) {
            Some(entry) => entry.1 = choice.to_string(),
            None => self.entries.push((keyword.to_string(), choice.to_string())),
        }
        Ok(())
    }

    /// Build a set from (keyword, choice) pairs.
    pub fn from_pairs<'a, I>(pairs: I) -> SummaResult<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut set = Self::new();
        for (keyword, choice) in pairs {
            set.insert(keyword, choice)?;
        }
        Ok(set)
    }

    pub fn get(&self, keyword: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == keyword)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
