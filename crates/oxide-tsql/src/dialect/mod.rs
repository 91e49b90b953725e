//! T-SQL dialect versions.
//!
//! The parser recognises every construct regardless of the requested
//! version. Constructs newer than the requested version are still parsed and
//! are reported with a `TSQL4001` diagnostic; see [`Feature`].

use serde::{Deserialize, Serialize};

/// A SQL Server (or Azure Synapse) dialect version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum SqlVersion {
    /// SQL Server 2012.
    Sql110,
    /// SQL Server 2014.
    Sql120,
    /// SQL Server 2016.
    Sql130,
    /// SQL Server 2017.
    Sql140,
    /// SQL Server 2019.
    Sql150,
    /// SQL Server 2022.
    #[default]
    Sql160,
    /// Azure Synapse Analytics (dedicated SQL pools).
    AzureSynapse,
}

impl SqlVersion {
    /// All versions, oldest first.
    pub const ALL: [Self; 7] = [
        Self::Sql110,
        Self::Sql120,
        Self::Sql130,
        Self::Sql140,
        Self::Sql150,
        Self::Sql160,
        Self::AzureSynapse,
    ];

    /// Returns the display name of the version.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sql110 => "SQL Server 2012",
            Self::Sql120 => "SQL Server 2014",
            Self::Sql130 => "SQL Server 2016",
            Self::Sql140 => "SQL Server 2017",
            Self::Sql150 => "SQL Server 2019",
            Self::Sql160 => "SQL Server 2022",
            Self::AzureSynapse => "Azure Synapse Analytics",
        }
    }

    /// The SQL Server engine level the version is compared at for
    /// version-gated features. Synapse tracks the 2019 engine surface.
    const fn engine_level(self) -> Self {
        match self {
            Self::AzureSynapse => Self::Sql150,
            other => other,
        }
    }

    /// Returns true if `feature` is available in this version.
    #[must_use]
    pub fn supports(self, feature: Feature) -> bool {
        match feature.requirement() {
            Requirement::Since(minimum) => self.engine_level() >= minimum,
            Requirement::SynapseOnly => self == Self::AzureSynapse,
        }
    }
}

impl core::fmt::Display for SqlVersion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// When a [`Feature`] became available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Available from the given version onwards.
    Since(SqlVersion),
    /// Available only in Azure Synapse.
    SynapseOnly,
}

/// Version-gated syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// `CREATE OR ALTER`
    CreateOrAlter,
    /// `DROP … IF EXISTS`
    DropIfExists,
    /// `AT TIME ZONE`
    AtTimeZone,
    /// Graph `MATCH` predicates.
    GraphMatch,
    /// `AS NODE` / `AS EDGE` tables.
    GraphTables,
    /// The `WINDOW` clause.
    WindowClause,
    /// `IS [NOT] DISTINCT FROM`
    IsDistinctFrom,
    /// The `LEDGER` table option.
    LedgerTables,
    /// `CREATE WORKLOAD CLASSIFIER`
    WorkloadClassifier,
    /// The `DISTRIBUTION` table option.
    TableDistribution,
    /// `CREATE TABLE … AS SELECT`
    CreateTableAsSelect,
    /// `OPENROWSET(PROVIDER = …)`
    OpenRowsetCosmos,
}

impl Feature {
    /// Returns when the feature became available.
    #[must_use]
    pub const fn requirement(&self) -> Requirement {
        match self {
            Self::CreateOrAlter | Self::DropIfExists | Self::AtTimeZone => {
                Requirement::Since(SqlVersion::Sql130)
            }
            Self::GraphMatch | Self::GraphTables => Requirement::Since(SqlVersion::Sql140),
            Self::WindowClause | Self::IsDistinctFrom | Self::LedgerTables => {
                Requirement::Since(SqlVersion::Sql160)
            }
            Self::WorkloadClassifier
            | Self::TableDistribution
            | Self::CreateTableAsSelect
            | Self::OpenRowsetCosmos => Requirement::SynapseOnly,
        }
    }

    /// Returns the source spelling used in diagnostics.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::CreateOrAlter => "CREATE OR ALTER",
            Self::DropIfExists => "DROP IF EXISTS",
            Self::AtTimeZone => "AT TIME ZONE",
            Self::GraphMatch => "MATCH",
            Self::GraphTables => "AS NODE / AS EDGE",
            Self::WindowClause => "WINDOW clause",
            Self::IsDistinctFrom => "IS DISTINCT FROM",
            Self::LedgerTables => "LEDGER",
            Self::WorkloadClassifier => "CREATE WORKLOAD CLASSIFIER",
            Self::TableDistribution => "DISTRIBUTION",
            Self::CreateTableAsSelect => "CREATE TABLE AS SELECT",
            Self::OpenRowsetCosmos => "OPENROWSET(PROVIDER = ...)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_latest() {
        assert_eq!(SqlVersion::default(), SqlVersion::Sql160);
    }

    #[test]
    fn test_version_gates() {
        assert!(!SqlVersion::Sql120.supports(Feature::CreateOrAlter));
        assert!(SqlVersion::Sql130.supports(Feature::CreateOrAlter));
        assert!(!SqlVersion::Sql130.supports(Feature::GraphMatch));
        assert!(SqlVersion::Sql140.supports(Feature::GraphMatch));
        assert!(!SqlVersion::Sql150.supports(Feature::WindowClause));
        assert!(SqlVersion::Sql160.supports(Feature::IsDistinctFrom));
    }

    #[test]
    fn test_synapse_only_features() {
        assert!(!SqlVersion::Sql160.supports(Feature::WorkloadClassifier));
        assert!(SqlVersion::AzureSynapse.supports(Feature::WorkloadClassifier));
        assert!(SqlVersion::AzureSynapse.supports(Feature::DropIfExists));
        assert!(!SqlVersion::AzureSynapse.supports(Feature::LedgerTables));
    }

    #[test]
    fn test_version_deserializes_from_name() {
        let version: SqlVersion = serde_json::from_str("\"Sql140\"").unwrap();
        assert_eq!(version, SqlVersion::Sql140);
    }
}
