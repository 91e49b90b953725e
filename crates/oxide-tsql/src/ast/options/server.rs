//! Server-level object options: event sessions, resource governor,
//! availability groups, queues and full-text objects.

use oxide_tsql_derive::AstNode;
use serde::Serialize;

use super::{LiteralRange, OptionState};
use crate::lexer::Span;

option_kinds! {
    /// `EVENT SESSION … WITH ( … )` option names.
    pub enum EventSessionOptionKind {
        EventRetentionMode = "EVENT_RETENTION_MODE" => Enumerated(&[
            "ALLOW_SINGLE_EVENT_LOSS",
            "ALLOW_MULTIPLE_EVENT_LOSS",
            "NO_EVENT_LOSS",
        ]),
        MaxDispatchLatency = "MAX_DISPATCH_LATENCY" => Quantity,
        MaxEventSize = "MAX_EVENT_SIZE" => Quantity,
        MaxMemory = "MAX_MEMORY" => Quantity,
        MemoryPartitionMode = "MEMORY_PARTITION_MODE" => Enumerated(&[
            "NONE", "PER_NODE", "PER_CPU",
        ]),
        StartupState = "STARTUP_STATE" => OnOff,
        TrackCausality = "TRACK_CAUSALITY" => OnOff,
    }
}

general_option! {
    /// One event session option.
    EventSessionOption, EventSessionOptionKind
}

option_kinds! {
    /// `RESOURCE POOL … WITH ( … )` option names.
    pub enum ResourcePoolOptionKind {
        Affinity = "AFFINITY" => Custom,
        CapCpuPercent = "CAP_CPU_PERCENT" => Integer,
        MaxCpuPercent = "MAX_CPU_PERCENT" => Integer,
        MaxIopsPerVolume = "MAX_IOPS_PER_VOLUME" => Integer,
        MaxMemoryPercent = "MAX_MEMORY_PERCENT" => Integer,
        MinCpuPercent = "MIN_CPU_PERCENT" => Integer,
        MinIopsPerVolume = "MIN_IOPS_PER_VOLUME" => Integer,
        MinMemoryPercent = "MIN_MEMORY_PERCENT" => Integer,
    }
}

general_option! {
    /// A resource pool option whose value follows the kind's shape.
    GeneralResourcePoolOption, ResourcePoolOptionKind
}

/// One resource pool option.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(untagged)]
pub enum ResourcePoolOption {
    /// `NAME = value`.
    General(GeneralResourcePoolOption),
    /// `AFFINITY SCHEDULER = … | NUMANODE = …`.
    Affinity(ResourcePoolAffinityOption),
}

impl ResourcePoolOption {
    /// Returns the option's kind.
    #[must_use]
    pub const fn option_kind(&self) -> ResourcePoolOptionKind {
        match self {
            Self::General(o) => o.option_kind,
            Self::Affinity(o) => o.option_kind,
        }
    }
}

keyword_enum! {
    /// What a resource pool is bound to.
    pub enum ResourcePoolAffinityType {
        Scheduler = "SCHEDULER",
        NumaNode = "NUMANODE",
    }
}

/// `AFFINITY SCHEDULER = AUTO | ( 0 TO 3, 5 )`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ResourcePoolAffinityOption {
    /// Always [`ResourcePoolOptionKind::Affinity`].
    pub option_kind: ResourcePoolOptionKind,
    /// Schedulers or NUMA nodes.
    pub affinity_type: ResourcePoolAffinityType,
    /// `AUTO`.
    pub is_auto: bool,
    /// The ranges.
    pub pool_affinity_ranges: Vec<LiteralRange>,
    /// Source span.
    pub span: Span,
}

option_kinds! {
    /// `WORKLOAD GROUP … WITH ( … )` parameter names.
    pub enum WorkloadGroupParameterKind {
        CapPercentageResource = "CAP_PERCENTAGE_RESOURCE" => Integer,
        GroupMaxRequests = "GROUP_MAX_REQUESTS" => Integer,
        Importance = "IMPORTANCE" => Enumerated(&[
            "LOW", "BELOW_NORMAL", "NORMAL", "ABOVE_NORMAL", "HIGH", "MEDIUM",
        ]),
        MaxDop = "MAX_DOP" => Integer,
        MinPercentageResource = "MIN_PERCENTAGE_RESOURCE" => Integer,
        QueryExecutionTimeoutSec = "QUERY_EXECUTION_TIMEOUT_SEC" => Integer,
        RequestMaxCpuTimeSec = "REQUEST_MAX_CPU_TIME_SEC" => Integer,
        RequestMaxMemoryGrantPercent = "REQUEST_MAX_MEMORY_GRANT_PERCENT" => Literal,
        RequestMaxResourceGrantPercent = "REQUEST_MAX_RESOURCE_GRANT_PERCENT" => Literal,
        RequestMemoryGrantTimeoutSec = "REQUEST_MEMORY_GRANT_TIMEOUT_SEC" => Integer,
        RequestMinResourceGrantPercent = "REQUEST_MIN_RESOURCE_GRANT_PERCENT" => Literal,
    }
}

general_option! {
    /// One workload group parameter.
    WorkloadGroupParameter, WorkloadGroupParameterKind
}

option_kinds! {
    /// `WORKLOAD CLASSIFIER … WITH ( … )` option names.
    pub enum WorkloadClassifierOptionKind {
        EndTime = "END_TIME" => String,
        Importance = "IMPORTANCE" => Enumerated(&[
            "LOW", "BELOW_NORMAL", "NORMAL", "ABOVE_NORMAL", "HIGH",
        ]),
        MemberName = "MEMBERNAME" => String,
        StartTime = "START_TIME" => String,
        WlmContext = "WLM_CONTEXT" => String,
        WlmLabel = "WLM_LABEL" => String,
        WorkloadGroup = "WORKLOAD_GROUP" => String,
    }
}

general_option! {
    /// One workload classifier option.
    WorkloadClassifierOption, WorkloadClassifierOptionKind
}

option_kinds! {
    /// `AVAILABILITY GROUP … WITH ( … )` option names.
    pub enum AvailabilityGroupOptionKind {
        AutomatedBackupPreference = "AUTOMATED_BACKUP_PREFERENCE" => Enumerated(&[
            "PRIMARY", "SECONDARY_ONLY", "SECONDARY", "NONE",
        ]),
        Basic = "BASIC" => Flag,
        ClusterType = "CLUSTER_TYPE" => Enumerated(&["WSFC", "EXTERNAL", "NONE"]),
        Contained = "CONTAINED" => Flag,
        DbFailover = "DB_FAILOVER" => OnOff,
        Distributed = "DISTRIBUTED" => Flag,
        DtcSupport = "DTC_SUPPORT" => Enumerated(&["PER_DB", "NONE"]),
        FailureConditionLevel = "FAILURE_CONDITION_LEVEL" => Integer,
        HealthCheckTimeout = "HEALTH_CHECK_TIMEOUT" => Integer,
        RequiredSynchronizedSecondariesToCommit = "REQUIRED_SYNCHRONIZED_SECONDARIES_TO_COMMIT" =>
            Integer,
    }
}

general_option! {
    /// One availability group option.
    AvailabilityGroupOption, AvailabilityGroupOptionKind
}

option_kinds! {
    /// Replica option names.
    pub enum AvailabilityReplicaOptionKind {
        AvailabilityMode = "AVAILABILITY_MODE" => Enumerated(&[
            "SYNCHRONOUS_COMMIT", "ASYNCHRONOUS_COMMIT", "CONFIGURATION_ONLY",
        ]),
        BackupPriority = "BACKUP_PRIORITY" => Integer,
        EndpointUrl = "ENDPOINT_URL" => String,
        FailoverMode = "FAILOVER_MODE" => Enumerated(&["AUTOMATIC", "MANUAL", "EXTERNAL"]),
        PrimaryRole = "PRIMARY_ROLE" => Custom,
        SecondaryRole = "SECONDARY_ROLE" => Custom,
        SeedingMode = "SEEDING_MODE" => Enumerated(&["AUTOMATIC", "MANUAL"]),
        SessionTimeout = "SESSION_TIMEOUT" => Integer,
    }
}

general_option! {
    /// A replica option whose value follows the kind's shape.
    GeneralAvailabilityReplicaOption, AvailabilityReplicaOptionKind
}

/// One replica option.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(untagged)]
pub enum AvailabilityReplicaOption {
    /// `NAME = value`.
    General(GeneralAvailabilityReplicaOption),
    /// `PRIMARY_ROLE ( … )` / `SECONDARY_ROLE ( … )`.
    Role(ReplicaRoleOption),
}

impl AvailabilityReplicaOption {
    /// Returns the option's kind.
    #[must_use]
    pub const fn option_kind(&self) -> AvailabilityReplicaOptionKind {
        match self {
            Self::General(o) => o.option_kind,
            Self::Role(o) => o.option_kind,
        }
    }
}

option_kinds! {
    /// Sub-option names of `PRIMARY_ROLE` / `SECONDARY_ROLE`.
    pub enum ReplicaRoleOptionKind {
        AllowConnections = "ALLOW_CONNECTIONS" => Enumerated(&[
            "NO", "READ_ONLY", "ALL", "READ_WRITE",
        ]),
        ReadOnlyRoutingList = "READ_ONLY_ROUTING_LIST" => Custom,
        ReadOnlyRoutingUrl = "READ_ONLY_ROUTING_URL" => String,
        ReadWriteRoutingUrl = "READ_WRITE_ROUTING_URL" => String,
    }
}

/// One role sub-option; routing lists keep every server in order.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ReplicaRoleSubOption {
    /// The sub-option.
    pub option_kind: ReplicaRoleOptionKind,
    /// The value; `NONE` routing lists are an empty list.
    pub values: Vec<super::OptionValue>,
    /// Source span.
    pub span: Span,
}

/// `PRIMARY_ROLE ( … )` / `SECONDARY_ROLE ( … )`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ReplicaRoleOption {
    /// [`AvailabilityReplicaOptionKind::PrimaryRole`] or
    /// [`AvailabilityReplicaOptionKind::SecondaryRole`].
    pub option_kind: AvailabilityReplicaOptionKind,
    /// The sub-options.
    pub options: Vec<ReplicaRoleSubOption>,
    /// Source span.
    pub span: Span,
}

option_kinds! {
    /// `QUEUE … WITH` option names.
    pub enum QueueOptionKind {
        Activation = "ACTIVATION" => Custom,
        PoisonMessageHandling = "POISON_MESSAGE_HANDLING" => Custom,
        Retention = "RETENTION" => OnOff,
        Status = "STATUS" => OnOff,
    }
}

general_option! {
    /// A queue option whose value follows the kind's shape.
    GeneralQueueOption, QueueOptionKind
}

/// One queue option.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(untagged)]
pub enum QueueOption {
    /// `STATUS = ON` and friends.
    General(GeneralQueueOption),
    /// `ACTIVATION ( … )`.
    Activation(QueueActivationOption),
    /// `POISON_MESSAGE_HANDLING ( STATUS = ON )`.
    PoisonMessage(QueueStateOption),
}

impl QueueOption {
    /// Returns the option's kind.
    #[must_use]
    pub const fn option_kind(&self) -> QueueOptionKind {
        match self {
            Self::General(o) => o.option_kind,
            Self::Activation(o) => o.option_kind,
            Self::PoisonMessage(o) => o.option_kind,
        }
    }
}

/// `POISON_MESSAGE_HANDLING ( STATUS = ON|OFF )`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct QueueStateOption {
    /// Always [`QueueOptionKind::PoisonMessageHandling`].
    pub option_kind: QueueOptionKind,
    /// The status.
    pub option_state: OptionState,
    /// Source span.
    pub span: Span,
}

option_kinds! {
    /// `ACTIVATION ( … )` sub-option names.
    pub enum QueueActivationOptionKind {
        Drop = "DROP" => Flag,
        ExecuteAs = "EXECUTE AS" => Custom,
        MaxQueueReaders = "MAX_QUEUE_READERS" => Integer,
        ProcedureName = "PROCEDURE_NAME" => Name,
        Status = "STATUS" => OnOff,
    }
}

general_option! {
    /// One activation sub-option. `EXECUTE AS` keeps `SELF` / `OWNER` as
    /// keyword values and a user name as a string literal.
    QueueActivationSubOption, QueueActivationOptionKind
}

/// `ACTIVATION ( STATUS = ON, PROCEDURE_NAME = p, … )` or `ACTIVATION ( DROP )`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct QueueActivationOption {
    /// Always [`QueueOptionKind::Activation`].
    pub option_kind: QueueOptionKind,
    /// The sub-options.
    pub options: Vec<QueueActivationSubOption>,
    /// Source span.
    pub span: Span,
}

option_kinds! {
    /// `FULLTEXT CATALOG … WITH` option names.
    pub enum FullTextCatalogOptionKind {
        AccentSensitivity = "ACCENT_SENSITIVITY" => OnOff,
    }
}

general_option! {
    /// One full-text catalog option.
    FullTextCatalogOption, FullTextCatalogOptionKind
}

option_kinds! {
    /// `FULLTEXT INDEX … WITH` option names.
    pub enum FullTextIndexOptionKind {
        ChangeTracking = "CHANGE_TRACKING" => Enumerated(&["MANUAL", "AUTO", "OFF"]),
        NoPopulation = "NO POPULATION" => Flag,
        SearchPropertyList = "SEARCH PROPERTY LIST" => Literal,
        StopList = "STOPLIST" => Literal,
    }
}

general_option! {
    /// One full-text index option.
    FullTextIndexOption, FullTextIndexOptionKind
}
