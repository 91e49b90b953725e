//! Structural validation of syntax trees.
//!
//! The parser only builds well-shaped trees. Trees assembled or rewritten by
//! hand can break shapes the types alone do not rule out; [`validate_script`]
//! reports those as [`StructuralError`]s.

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::ast::{Script, Statement};
use crate::lexer::Span;
use crate::parser::{Diagnostic, DiagnosticCode};
use crate::serialize;
use crate::visit::{Node, VisitAction, Visitor, Walk};

/// A shape violation found in a syntax tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    /// A `MERGE` with no `WHEN` clause.
    #[error("MERGE statement has no action clauses")]
    EmptyMerge {
        /// The statement.
        span: Span,
    },

    /// A `SchemaObjectName` whose base part is empty.
    #[error("object name has an empty base identifier")]
    EmptyObjectName {
        /// The name.
        span: Span,
    },

    /// A `THROW` with some but not all of its three arguments.
    #[error("THROW must have either no arguments or all three")]
    PartialThrow {
        /// The statement.
        span: Span,
    },

    /// An option struct tagged with a kind it cannot represent.
    #[error("{node} cannot carry option kind {kind}")]
    InadmissibleOptionKind {
        /// The option struct's type name.
        node: String,
        /// The kind it carries.
        kind: String,
        /// The option, when its span could be read.
        span: Span,
    },

    /// A node whose span is not inside its parent's.
    #[error(
        "{node} at {}..{} lies outside its parent at {}..{}",
        .span.start, .span.end, .parent.start, .parent.end
    )]
    SpanOutsideParent {
        /// The child's node type.
        node: &'static str,
        /// The child.
        span: Span,
        /// The parent.
        parent: Span,
    },

    /// A node that starts before the sibling walked ahead of it.
    #[error("{node} at {} starts before its previous sibling at {previous_start}", .span.start)]
    SiblingOutOfOrder {
        /// The node type.
        node: &'static str,
        /// The node.
        span: Span,
        /// Start of the previous sibling.
        previous_start: usize,
    },
}

impl StructuralError {
    /// Returns the span the error points at.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::EmptyMerge { span }
            | Self::EmptyObjectName { span }
            | Self::PartialThrow { span }
            | Self::InadmissibleOptionKind { span, .. }
            | Self::SpanOutsideParent { span, .. }
            | Self::SiblingOutOfOrder { span, .. } => *span,
        }
    }
}

impl From<StructuralError> for Diagnostic {
    fn from(error: StructuralError) -> Self {
        Self::error(DiagnosticCode::Structural, error.to_string(), error.span())
    }
}

/// Option structs restricted to a subset of their family's kinds, keyed by
/// type name.
const RESTRICTED_OPTION_KINDS: &[(&str, &[&str])] = &[
    ("SampleStatisticsOption", &["Sample"]),
    ("QueryStoreDatabaseOption", &["QueryStore"]),
    ("QueryStoreDesiredStateOption", &["OperationMode"]),
    ("QueryStoreCapturePolicyOption", &["QueryCaptureMode"]),
    ("QueryStoreSizeCleanupPolicyOption", &["SizeBasedCleanupMode"]),
    ("QueryStoreDataFlushIntervalOption", &["DataFlushIntervalSeconds"]),
    ("QueryStoreIntervalLengthOption", &["IntervalLengthMinutes"]),
    ("QueryStoreMaxStorageSizeOption", &["MaxStorageSizeMb"]),
    ("QueryStoreMaxPlansPerQueryOption", &["MaxPlansPerQuery"]),
    ("QueryStoreTimeCleanupPolicyOption", &["CleanupPolicy"]),
    ("QueryStoreWaitStatsCaptureOption", &["WaitStatsCaptureMode"]),
    ("QueryStoreCustomCapturePolicyOption", &["QueryCapturePolicy"]),
    ("ChangeTrackingDatabaseOption", &["ChangeTracking"]),
    ("AutomaticTuningDatabaseOption", &["AutomaticTuning"]),
    ("FileStreamDatabaseOption", &["FileStream"]),
    ("AcceleratedDatabaseRecoveryDatabaseOption", &["AcceleratedDatabaseRecovery"]),
    ("PersistentLogBufferDatabaseOption", &["PersistentLogBuffer"]),
    ("ExternalFileFormatContainerOption", &["FormatOptions"]),
    ("OrderBulkInsertOption", &["Order"]),
    ("BackupEncryptionOption", &["Encryption"]),
    ("MoveRestoreOption", &["Move"]),
    ("ExecuteAsModuleOption", &["ExecuteAs", "ExecAs"]),
    ("DataTypeSequenceOption", &["As"]),
    ("PasswordPrincipalOption", &["Password"]),
    ("ResourcePoolAffinityOption", &["Affinity"]),
    ("ReplicaRoleOption", &["PrimaryRole", "SecondaryRole"]),
    ("QueueStateOption", &["PoisonMessageHandling"]),
    ("QueueActivationOption", &["Activation"]),
    ("SystemVersioningTableOption", &["SystemVersioning"]),
    ("LedgerTableOption", &["Ledger"]),
    ("TableCompressionOption", &["DataCompression", "XmlCompression"]),
    ("TableDistributionOption", &["Distribution"]),
    ("IndexCompressionOption", &["DataCompression", "XmlCompression"]),
];

/// Checks a script for shape violations.
///
/// Returns every violation found, in tree order for the statement and span
/// checks followed by the option-kind checks. A tree produced by the parser
/// yields none.
#[must_use]
pub fn validate_script(script: &Script) -> Vec<StructuralError> {
    let mut validator = ShapeValidator::default();
    script.walk(&mut validator);
    let mut errors = validator.errors;
    check_option_kinds(&serialize::to_value(script), &mut errors);
    debug!(errors = errors.len(), "validated script");
    errors
}

struct Frame {
    span: Span,
    previous_start: Option<usize>,
}

#[derive(Default)]
struct ShapeValidator {
    stack: Vec<Frame>,
    errors: Vec<StructuralError>,
}

impl ShapeValidator {
    fn check_statement(&mut self, statement: &Statement) {
        match statement {
            Statement::Merge(merge) if merge.merge_specification.action_clauses.is_empty() => {
                self.errors.push(StructuralError::EmptyMerge { span: merge.span });
            }
            Statement::Throw(throw) => {
                let given = [&throw.error_number, &throw.message, &throw.state]
                    .iter()
                    .filter(|argument| argument.is_some())
                    .count();
                if given != 0 && given != 3 {
                    self.errors.push(StructuralError::PartialThrow { span: throw.span });
                }
            }
            _ => {}
        }
    }

    fn check_placement(&mut self, node: &Node<'_>) {
        let span = node.span();
        let Some(parent) = self.stack.last_mut() else {
            return;
        };
        if !parent.span.contains(&span) {
            self.errors.push(StructuralError::SpanOutsideParent {
                node: node.type_name(),
                span,
                parent: parent.span,
            });
        }
        if let Some(previous_start) = parent.previous_start {
            if span.start < previous_start {
                self.errors.push(StructuralError::SiblingOutOfOrder {
                    node: node.type_name(),
                    span,
                    previous_start,
                });
            }
        }
        parent.previous_start = Some(span.start);
    }
}

impl<'ast> Visitor<'ast> for ShapeValidator {
    fn pre_visit(&mut self, node: Node<'ast>) -> VisitAction {
        self.check_placement(&node);
        match node {
            Node::Statement(statement) => self.check_statement(statement),
            Node::SchemaObjectName(name) if name.base_identifier.value.is_empty() => {
                self.errors.push(StructuralError::EmptyObjectName { span: name.span });
            }
            _ => {}
        }
        self.stack.push(Frame {
            span: node.span(),
            previous_start: None,
        });
        VisitAction::Continue
    }

    fn post_visit(&mut self, _node: Node<'ast>) {
        self.stack.pop();
    }
}

fn check_option_kinds(value: &Value, errors: &mut Vec<StructuralError>) {
    match value {
        Value::Object(map) => {
            let node = map.get("$type").and_then(Value::as_str);
            let kind = map.get("OptionKind").and_then(Value::as_str);
            if let (Some(node), Some(kind)) = (node, kind) {
                let admissible = RESTRICTED_OPTION_KINDS
                    .iter()
                    .find(|(name, _)| *name == node)
                    .is_none_or(|(_, kinds)| kinds.contains(&kind));
                if !admissible {
                    errors.push(StructuralError::InadmissibleOptionKind {
                        node: node.to_owned(),
                        kind: kind.to_owned(),
                        span: map.get("Span").map(span_of).unwrap_or_default(),
                    });
                }
            }
            for child in map.values() {
                check_option_kinds(child, errors);
            }
        }
        Value::Array(items) => {
            for item in items {
                check_option_kinds(item, errors);
            }
        }
        _ => {}
    }
}

fn span_of(value: &Value) -> Span {
    let field = |key: &str| value.get(key).and_then(Value::as_u64).unwrap_or_default();
    Span::new(
        usize::try_from(field("Start")).unwrap_or_default(),
        usize::try_from(field("End")).unwrap_or_default(),
        u32::try_from(field("Line")).unwrap_or(1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Identifier, QuoteType};
    use crate::parse;
    use crate::visit::Fold;

    #[test]
    fn test_parsed_scripts_are_clean() {
        for sql in [
            "SELECT a, b + 1 AS c FROM dbo.t AS x WHERE x.id = @id ORDER BY a",
            "MERGE dbo.t AS tgt USING dbo.s AS src ON tgt.id = src.id \
             WHEN MATCHED THEN UPDATE SET tgt.v = src.v \
             WHEN NOT MATCHED THEN INSERT (id, v) VALUES (src.id, src.v);",
            "IF @x > 0 BEGIN THROW 50000, 'bad', 1; END ELSE PRINT 'ok'",
            "ALTER DATABASE db SET QUERY_STORE (OPERATION_MODE = READ_WRITE, \
             MAX_STORAGE_SIZE_MB = 100)",
        ] {
            let result = parse(sql);
            assert!(!result.has_errors(), "{sql}: {:?}", result.diagnostics);
            assert_eq!(validate_script(&result.script), Vec::new(), "{sql}");
        }
    }

    #[test]
    fn test_partial_throw() {
        let mut script = parse("THROW 50000, 'bad', 1").script;
        let Statement::Throw(throw) = &mut script.batches[0].statements[0] else {
            panic!("expected THROW");
        };
        throw.state = None;
        let errors = validate_script(&script);
        assert!(matches!(errors.as_slice(), [StructuralError::PartialThrow { .. }]));
    }

    #[test]
    fn test_empty_merge() {
        let mut script = parse("MERGE t USING s ON t.id = s.id WHEN MATCHED THEN DELETE;").script;
        let Statement::Merge(merge) = &mut script.batches[0].statements[0] else {
            panic!("expected MERGE");
        };
        merge.merge_specification.action_clauses.clear();
        let errors = validate_script(&script);
        assert!(errors.iter().any(|e| matches!(e, StructuralError::EmptyMerge { .. })));
    }

    #[test]
    fn test_empty_object_name() {
        struct Blank;
        impl crate::visit::Rewriter for Blank {
            fn rewrite_identifier(&mut self, node: Identifier) -> Identifier {
                if node.value == "t" {
                    return Identifier::new("", QuoteType::None, node.span);
                }
                node
            }
        }

        let script = parse("SELECT * FROM t").script.fold(&mut Blank);
        let errors = validate_script(&script);
        assert!(errors.iter().any(|e| matches!(e, StructuralError::EmptyObjectName { .. })));
    }

    #[test]
    fn test_span_outside_parent() {
        struct Stretch;
        impl crate::visit::Rewriter for Stretch {
            fn rewrite_identifier(&mut self, mut node: Identifier) -> Identifier {
                node.span = Span::new(node.span.start, node.span.end + 100, node.span.line);
                node
            }
        }

        let script = parse("SELECT a FROM t").script.fold(&mut Stretch);
        let errors = validate_script(&script);
        assert!(errors
            .iter()
            .any(|e| matches!(e, StructuralError::SpanOutsideParent { node: "Identifier", .. })));
    }

    #[test]
    fn test_inadmissible_option_kind() {
        let mut value = serde_json::json!({
            "$type": "QueryStoreMaxStorageSizeOption",
            "OptionKind": "IntervalLengthMinutes",
            "Span": {"Start": 4, "End": 9, "Line": 1},
        });
        let mut errors = Vec::new();
        check_option_kinds(&value, &mut errors);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].span(), Span::new(4, 9, 1));
        assert_eq!(
            errors[0].to_string(),
            "QueryStoreMaxStorageSizeOption cannot carry option kind IntervalLengthMinutes"
        );

        value["OptionKind"] = Value::from("MaxStorageSizeMb");
        errors.clear();
        check_option_kinds(&value, &mut errors);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_structural_diagnostic() {
        let diagnostic = Diagnostic::from(StructuralError::EmptyMerge {
            span: Span::new(0, 5, 1),
        });
        assert_eq!(diagnostic.code.as_str(), "TSQL3001");
        assert!(diagnostic.is_error());
    }
}
