/// Prints an error followed by every cause in its `source` chain.
///
/// Meant to back hand-written `Debug` impls of error enums.
pub fn error_chain_fmt(
    e: &dyn std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{e}")?;

    let mut current = e.source();
    while let Some(cause) = current {
        // `{:#?}` asks for Debug output of the causes, anything else gets Display
        if f.alternate() {
            writeln!(f, "Caused by:\n\t{cause:?}")?;
        } else {
            writeln!(f, "Caused by:\n\t{cause}")?;
        }
        current = cause.source();
    }
    Ok(())
}
