//! T-SQL keyword tags.
//!
//! Reserved words lex as [`TokenKind::Keyword`](super::TokenKind). Contextual
//! words lex as plain identifiers and are matched by tag where the grammar
//! expects them, so they stay usable as names everywhere else.

macro_rules! keywords {
    (
        reserved { $($reserved:ident => $reserved_text:literal,)* }
        contextual { $($contextual:ident => $contextual_text:literal,)* }
    ) => {
        /// T-SQL keywords, reserved and contextual.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Keyword {
            $(
                #[doc = concat!("`", $reserved_text, "` (reserved)")]
                $reserved,
            )*
            $(
                #[doc = concat!("`", $contextual_text, "`")]
                $contextual,
            )*
        }

        impl Keyword {
            /// Attempts to parse a keyword from a string (case-insensitive).
            #[must_use]
            #[allow(clippy::should_implement_trait)]
            pub fn from_str(s: &str) -> Option<Self> {
                match s.to_ascii_uppercase().as_str() {
                    $($reserved_text => Some(Self::$reserved),)*
                    $($contextual_text => Some(Self::$contextual),)*
                    _ => None,
                }
            }

            /// Returns the keyword as a string.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$reserved => $reserved_text,)*
                    $(Self::$contextual => $contextual_text,)*
                }
            }

            /// Returns true if the word is reserved and cannot be used as a
            /// regular identifier.
            #[must_use]
            pub const fn is_reserved(&self) -> bool {
                matches!(self, $(Self::$reserved)|*)
            }
        }
    };
}

keywords! {
    reserved {
        Add => "ADD",
        All => "ALL",
        Alter => "ALTER",
        And => "AND",
        Any => "ANY",
        As => "AS",
        Asc => "ASC",
        Authorization => "AUTHORIZATION",
        Backup => "BACKUP",
        Begin => "BEGIN",
        Between => "BETWEEN",
        Break => "BREAK",
        Browse => "BROWSE",
        Bulk => "BULK",
        By => "BY",
        Cascade => "CASCADE",
        Case => "CASE",
        Check => "CHECK",
        Checkpoint => "CHECKPOINT",
        Close => "CLOSE",
        Clustered => "CLUSTERED",
        Coalesce => "COALESCE",
        Collate => "COLLATE",
        Column => "COLUMN",
        Commit => "COMMIT",
        Compute => "COMPUTE",
        Constraint => "CONSTRAINT",
        Contains => "CONTAINS",
        ContainsTable => "CONTAINSTABLE",
        Continue => "CONTINUE",
        Convert => "CONVERT",
        Create => "CREATE",
        Cross => "CROSS",
        Current => "CURRENT",
        CurrentDate => "CURRENT_DATE",
        CurrentTime => "CURRENT_TIME",
        CurrentTimestamp => "CURRENT_TIMESTAMP",
        CurrentUser => "CURRENT_USER",
        Cursor => "CURSOR",
        Database => "DATABASE",
        Dbcc => "DBCC",
        Deallocate => "DEALLOCATE",
        Declare => "DECLARE",
        Default => "DEFAULT",
        Delete => "DELETE",
        Deny => "DENY",
        Desc => "DESC",
        Disk => "DISK",
        Distinct => "DISTINCT",
        Distributed => "DISTRIBUTED",
        Double => "DOUBLE",
        Drop => "DROP",
        Dump => "DUMP",
        Else => "ELSE",
        End => "END",
        Errlvl => "ERRLVL",
        Escape => "ESCAPE",
        Except => "EXCEPT",
        Exec => "EXEC",
        Execute => "EXECUTE",
        Exists => "EXISTS",
        Exit => "EXIT",
        External => "EXTERNAL",
        Fetch => "FETCH",
        File => "FILE",
        FillFactor => "FILLFACTOR",
        For => "FOR",
        Foreign => "FOREIGN",
        FreeText => "FREETEXT",
        FreeTextTable => "FREETEXTTABLE",
        From => "FROM",
        Full => "FULL",
        Function => "FUNCTION",
        Goto => "GOTO",
        Grant => "GRANT",
        Group => "GROUP",
        Having => "HAVING",
        HoldLock => "HOLDLOCK",
        Identity => "IDENTITY",
        IdentityInsert => "IDENTITY_INSERT",
        IdentityCol => "IDENTITYCOL",
        If => "IF",
        In => "IN",
        Index => "INDEX",
        Inner => "INNER",
        Insert => "INSERT",
        Intersect => "INTERSECT",
        Into => "INTO",
        Is => "IS",
        Join => "JOIN",
        Key => "KEY",
        Kill => "KILL",
        Left => "LEFT",
        Like => "LIKE",
        LineNo => "LINENO",
        Load => "LOAD",
        Merge => "MERGE",
        National => "NATIONAL",
        NoCheck => "NOCHECK",
        NonClustered => "NONCLUSTERED",
        Not => "NOT",
        Null => "NULL",
        NullIf => "NULLIF",
        Of => "OF",
        Off => "OFF",
        Offsets => "OFFSETS",
        On => "ON",
        Open => "OPEN",
        OpenDataSource => "OPENDATASOURCE",
        OpenQuery => "OPENQUERY",
        OpenRowset => "OPENROWSET",
        OpenXml => "OPENXML",
        Option => "OPTION",
        Or => "OR",
        Order => "ORDER",
        Outer => "OUTER",
        Over => "OVER",
        Percent => "PERCENT",
        Pivot => "PIVOT",
        Plan => "PLAN",
        Precision => "PRECISION",
        Primary => "PRIMARY",
        Print => "PRINT",
        Proc => "PROC",
        Procedure => "PROCEDURE",
        Public => "PUBLIC",
        RaisError => "RAISERROR",
        Read => "READ",
        ReadText => "READTEXT",
        Reconfigure => "RECONFIGURE",
        References => "REFERENCES",
        Replication => "REPLICATION",
        Restore => "RESTORE",
        Restrict => "RESTRICT",
        Return => "RETURN",
        Revert => "REVERT",
        Revoke => "REVOKE",
        Right => "RIGHT",
        Rollback => "ROLLBACK",
        RowCount => "ROWCOUNT",
        RowGuidCol => "ROWGUIDCOL",
        Rule => "RULE",
        Save => "SAVE",
        Schema => "SCHEMA",
        SecurityAudit => "SECURITYAUDIT",
        Select => "SELECT",
        SemanticKeyPhraseTable => "SEMANTICKEYPHRASETABLE",
        SemanticSimilarityDetailsTable => "SEMANTICSIMILARITYDETAILSTABLE",
        SemanticSimilarityTable => "SEMANTICSIMILARITYTABLE",
        SessionUser => "SESSION_USER",
        Set => "SET",
        SetUser => "SETUSER",
        Shutdown => "SHUTDOWN",
        Some => "SOME",
        Statistics => "STATISTICS",
        SystemUser => "SYSTEM_USER",
        Table => "TABLE",
        TableSample => "TABLESAMPLE",
        TextSize => "TEXTSIZE",
        Then => "THEN",
        To => "TO",
        Top => "TOP",
        Tran => "TRAN",
        Transaction => "TRANSACTION",
        Trigger => "TRIGGER",
        Truncate => "TRUNCATE",
        TryConvert => "TRY_CONVERT",
        TsEqual => "TSEQUAL",
        Union => "UNION",
        Unique => "UNIQUE",
        Unpivot => "UNPIVOT",
        Update => "UPDATE",
        UpdateText => "UPDATETEXT",
        Use => "USE",
        User => "USER",
        Values => "VALUES",
        Varying => "VARYING",
        View => "VIEW",
        WaitFor => "WAITFOR",
        When => "WHEN",
        Where => "WHERE",
        While => "WHILE",
        With => "WITH",
        Within => "WITHIN",
        WriteText => "WRITETEXT",
    }
    contextual {
        Online => "ONLINE",
    }
}

impl Keyword {
    /// Returns the reserved keyword spelled by `s`, if any.
    #[must_use]
    pub fn reserved(s: &str) -> Option<Self> {
        Self::from_str(s).filter(Self::is_reserved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_from_str() {
        assert_eq!(Keyword::from_str("SELECT"), Some(Keyword::Select));
        assert_eq!(Keyword::from_str("select"), Some(Keyword::Select));
        assert_eq!(Keyword::from_str("SeLeCt"), Some(Keyword::Select));
        assert_eq!(Keyword::from_str("not_a_keyword"), None);
    }

    #[test]
    fn test_keyword_as_str() {
        assert_eq!(Keyword::Select.as_str(), "SELECT");
        assert_eq!(Keyword::CurrentTimestamp.as_str(), "CURRENT_TIMESTAMP");
    }

    #[test]
    fn test_reserved_versus_contextual() {
        assert_eq!(Keyword::reserved("from"), Some(Keyword::From));
        assert_eq!(Keyword::reserved("online"), None);
        assert_eq!(Keyword::from_str("online"), Some(Keyword::Online));
        assert!(!Keyword::Online.is_reserved());
    }
}
