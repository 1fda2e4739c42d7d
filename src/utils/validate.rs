/// 空问题时展示给用户的提示
pub const EMPTY_QUESTION_WARNING: &str = "Please enter a valid question.";

/// 校验用户问题，返回去掉首尾空白后的内容
pub fn validate_question(question: &str) -> Result<&str, &'static str> {
    let trimmed = question.trim();
    if trimmed.is_empty() {
        return Err(EMPTY_QUESTION_WARNING);
    }
    Ok(trimmed)
}
