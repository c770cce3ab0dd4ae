use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Writes `prompt` to `output` and reads one answer line from `input`.
///
/// Only `y` or `Y` (surrounding whitespace ignored) proceeds. Any other
/// answer, an empty line or end of input cancels.
pub async fn confirm<R, W>(prompt: &str, input: &mut R, output: &mut W) -> std::io::Result<bool>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output.write_all(prompt.as_bytes()).await?;
    output.flush().await?;
    confirm_from(input).await
}

/// Reads one answer line from `input`. See [`confirm`].
pub async fn confirm_from<R>(input: &mut R) -> std::io::Result<bool>
where
    R: AsyncBufRead + Unpin,
{
    let mut answer = String::new();
    input.read_line(&mut answer).await?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
