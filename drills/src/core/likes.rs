//! "Who likes your post" line.

/// Render the likes line for the given names.
///
/// Returns `None` when nobody liked the post; beyond two names only the first
/// two are named and the rest are counted.
pub fn likes_message(names: &[String]) -> Option<String> {
    match names {
        [] => None,
        [only] => Some(format!("{only} likes your post.")),
        [first, second] => Some(format!("{first} and {second} like your post.")),
        [first, second, rest @ ..] => Some(format!(
            "{first}, {second} and {} others like your post.",
            rest.len()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn nobody_shows_nothing() {
        assert_eq!(likes_message(&[]), None);
    }

    #[test]
    fn one_and_two_names_are_listed() {
        assert_eq!(
            likes_message(&names(&["Ana"])).as_deref(),
            Some("Ana likes your post.")
        );
        assert_eq!(
            likes_message(&names(&["Ana", "Bo"])).as_deref(),
            Some("Ana and Bo like your post.")
        );
    }

    #[test]
    fn more_than_two_counts_the_others() {
        assert_eq!(
            likes_message(&names(&["Ana", "Bo", "Cy", "Di"])).as_deref(),
            Some("Ana, Bo and 2 others like your post.")
        );
    }
}
