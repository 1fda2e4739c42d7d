//! 生成语句的轻量分类
//!
//! 只看首个关键字和语句条数，用于日志与只读模式下的拦截，不是 SQL 解析器。

use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_COMMENTS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\s+|--[^\n]*(?:\n|$)|/\*(?s:.*?)\*/)*").expect("Invalid comment regex")
});

static KEYWORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z]+)").expect("Invalid keyword regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Select,
    With,
    Insert,
    Update,
    Delete,
    Ddl,
    Pragma,
    Other,
    Empty,
}

impl StatementKind {
    fn from_keyword(keyword: &str) -> Self {
        match keyword.to_ascii_uppercase().as_str() {
            "SELECT" | "VALUES" => StatementKind::Select,
            "WITH" => StatementKind::With,
            "INSERT" | "REPLACE" => StatementKind::Insert,
            "UPDATE" => StatementKind::Update,
            "DELETE" => StatementKind::Delete,
            "CREATE" | "DROP" | "ALTER" => StatementKind::Ddl,
            "PRAGMA" => StatementKind::Pragma,
            _ => StatementKind::Other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatementKind::Select => "select",
            StatementKind::With => "with",
            StatementKind::Insert => "insert",
            StatementKind::Update => "update",
            StatementKind::Delete => "delete",
            StatementKind::Ddl => "ddl",
            StatementKind::Pragma => "pragma",
            StatementKind::Other => "other",
            StatementKind::Empty => "empty",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementInfo {
    pub kind: StatementKind,
    pub statement_count: usize,
}

impl StatementInfo {
    /// 只读模式下放行的语句：单条且以 SELECT / WITH 开头
    pub fn is_read_only(&self) -> bool {
        self.statement_count == 1
            && matches!(self.kind, StatementKind::Select | StatementKind::With)
    }
}

pub fn classify_statement(sql: &str) -> StatementInfo {
    let body = LEADING_COMMENTS_RE.replace(sql, "");
    let kind = KEYWORD_RE
        .captures(&body)
        .and_then(|c| c.get(1))
        .map(|m| StatementKind::from_keyword(m.as_str()))
        .unwrap_or(StatementKind::Empty);

    StatementInfo {
        kind,
        statement_count: count_statements(sql),
    }
}

/// 统计以分号分隔的非空语句数，忽略引号和注释内的分号
fn count_statements(sql: &str) -> usize {
    let mut count = 0;
    let mut current_has_content = false;
    let mut quote: Option<char> = None;
    let mut chars = sql.chars().peekable();

    while let Some(ch) = chars.next() {
        if let Some(q) = quote {
            if ch == q {
                quote = None;
            }
            continue;
        }

        match ch {
            '-' if chars.peek() == Some(&'-') => {
                // 行注释直到换行
                for c in chars.by_ref() {
                    if c == '\n' {
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for c in chars.by_ref() {
                    if prev == '*' && c == '/' {
                        break;
                    }
                    prev = c;
                }
            }
            '\'' | '"' | '`' => {
                quote = Some(ch);
                current_has_content = true;
            }
            ';' => {
                if current_has_content {
                    count += 1;
                }
                current_has_content = false;
            }
            c if !c.is_whitespace() => current_has_content = true,
            _ => {}
        }
    }

    if current_has_content {
        count += 1;
    }
    count
}
