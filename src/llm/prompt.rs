/// 每次提问都会放在用户问题之前发送的固定指令
pub const SQL_PROMPT: &str = r#"You are an expert in converting English questions to SQL queries!
The SQL database has the name STUDENT and has the following columns - NAME, CLASS,
SECTION, MARKS. For example:
- Example 1: How many entries of records are present?
  SQL command: SELECT COUNT(*) FROM STUDENT;
- Example 2: Tell me all the students studying in Data Science class?
  SQL command: SELECT * FROM STUDENT WHERE CLASS='Data Science';
The SQL code should not have ``` at the beginning or end and should not include the word "SQL" in the output."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_describes_table_and_format() {
        assert!(SQL_PROMPT.contains("STUDENT"));
        assert!(SQL_PROMPT.contains("NAME, CLASS,\nSECTION, MARKS"));
        assert!(SQL_PROMPT.contains("SELECT COUNT(*) FROM STUDENT;"));
        assert!(SQL_PROMPT.contains("SELECT * FROM STUDENT WHERE CLASS='Data Science';"));
        assert!(SQL_PROMPT.contains("should not have ``` at the beginning or end"));
    }
}
