//! External data source, file format and table options.

use oxide_tsql_derive::AstNode;
use serde::Serialize;

option_kinds! {
    /// `EXTERNAL DATA SOURCE … WITH ( … )` option names.
    pub enum ExternalDataSourceOptionKind {
        ConnectionOptions = "CONNECTION_OPTIONS" => String,
        Credential = "CREDENTIAL" => Identifier,
        DatabaseName = "DATABASE_NAME" => String,
        Location = "LOCATION" => String,
        Pushdown = "PUSHDOWN" => OnOff,
        ResourceManagerLocation = "RESOURCE_MANAGER_LOCATION" => String,
        ShardMapName = "SHARD_MAP_NAME" => String,
        Type = "TYPE" => Enumerated(&["HADOOP", "BLOB_STORAGE", "RDBMS", "SHARD_MAP_MANAGER"]),
    }
}

general_option! {
    /// One external data source option.
    ExternalDataSourceOption, ExternalDataSourceOptionKind
}

option_kinds! {
    /// `EXTERNAL FILE FORMAT … WITH ( … )` option names, including those
    /// nested in `FORMAT_OPTIONS ( … )`.
    pub enum ExternalFileFormatOptionKind {
        DataCompression = "DATA_COMPRESSION" => String,
        DateFormat = "DATE_FORMAT" => String,
        Encoding = "ENCODING" => String,
        FieldTerminator = "FIELD_TERMINATOR" => String,
        FirstRow = "FIRST_ROW" => Integer,
        FormatOptions = "FORMAT_OPTIONS" => Custom,
        FormatType = "FORMAT_TYPE" => Enumerated(&[
            "DELIMITEDTEXT", "RCFILE", "ORC", "PARQUET", "JSON", "DELTA",
        ]),
        ParserVersion = "PARSER_VERSION" => String,
        SerdeMethod = "SERDE_METHOD" => String,
        StringDelimiter = "STRING_DELIMITER" => String,
        UseTypeDefault = "USE_TYPE_DEFAULT" => Literal,
    }
}

general_option! {
    /// An external file format option whose value follows the kind's shape.
    GeneralExternalFileFormatOption, ExternalFileFormatOptionKind
}

/// One external file format option.
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(untagged)]
pub enum ExternalFileFormatOption {
    /// `NAME = value`.
    General(GeneralExternalFileFormatOption),
    /// `FORMAT_OPTIONS ( … )`.
    Container(ExternalFileFormatContainerOption),
}

impl ExternalFileFormatOption {
    /// Returns the option's kind.
    #[must_use]
    pub const fn option_kind(&self) -> ExternalFileFormatOptionKind {
        match self {
            Self::General(o) => o.option_kind,
            Self::Container(o) => o.option_kind,
        }
    }
}

/// `FORMAT_OPTIONS ( FIELD_TERMINATOR = ',', … )`
#[derive(Debug, Clone, PartialEq, Serialize, AstNode)]
#[serde(tag = "$type", rename_all = "PascalCase")]
pub struct ExternalFileFormatContainerOption {
    /// Always [`ExternalFileFormatOptionKind::FormatOptions`].
    pub option_kind: ExternalFileFormatOptionKind,
    /// The nested options.
    pub suboptions: Vec<GeneralExternalFileFormatOption>,
    /// Source span.
    pub span: crate::lexer::Span,
}

option_kinds! {
    /// `EXTERNAL TABLE … WITH ( … )` option names.
    pub enum ExternalTableOptionKind {
        DataSource = "DATA_SOURCE" => Identifier,
        FileFormat = "FILE_FORMAT" => Identifier,
        Location = "LOCATION" => String,
        ObjectName = "OBJECT_NAME" => String,
        RejectSampleValue = "REJECT_SAMPLE_VALUE" => Literal,
        RejectType = "REJECT_TYPE" => Enumerated(&["VALUE", "PERCENTAGE"]),
        RejectValue = "REJECT_VALUE" => Literal,
        RejectedRowLocation = "REJECTED_ROW_LOCATION" => String,
        SchemaName = "SCHEMA_NAME" => String,
    }
}

general_option! {
    /// One external table option.
    ExternalTableOption, ExternalTableOptionKind
}
