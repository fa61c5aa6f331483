//! Folding disciplines shared by the parsers.

/// Collects successes until the first failure, which is returned as-is.
pub fn fail_fast<T, E, I>(items: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    items.into_iter().collect()
}

/// Runs every item and reports all failures in input order.
///
/// Successes are only returned when no item failed.
pub fn accumulate<T, E, I>(items: I) -> Result<Vec<T>, Vec<E>>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    let mut values = Vec::new();
    let mut errors = Vec::new();
    for item in items {
        match item {
            Ok(value) => values.push(value),
            Err(error) => errors.push(error),
        }
    }

    if errors.is_empty() {
        Ok(values)
    } else {
        Err(errors)
    }
}
