use std::collections::HashMap;

#[derive(PartialEq, Debug)]
pub struct QueryString {
    items: HashMap<String, String>,
}

impl QueryString {
    pub fn from(buf: &str) -> Self {
        let vs: Vec<(String, String)> = serde_urlencoded::from_str(buf).unwrap_or_else(|_| vec![]);
        let items: HashMap<String, String> = vs.into_iter().collect();

        QueryString {
            items,
        }
    }

    /// `page` parameter, 1 when missing or not a positive number.
    pub fn get_page(&self) -> u32 {
        match self.items.get("page").and_then(|p| p.trim().parse::<u32>().ok()) {
            Some(page) if page > 0 => page,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_page() {
        assert_eq!(QueryString::from("page=3").get_page(), 3);
        assert_eq!(QueryString::from("sort=new&page=2").get_page(), 2);
        assert_eq!(QueryString::from("").get_page(), 1);
        assert_eq!(QueryString::from("page=0").get_page(), 1);
        assert_eq!(QueryString::from("page=-4").get_page(), 1);
        assert_eq!(QueryString::from("page=abc").get_page(), 1);
    }

    #[test]
    fn test_parse_query_str() {
        let buf = "category=cuisine&q=cr%C3%A8me%20br%C3%BBl%C3%A9e";
        let expected = vec![
            ("category".to_owned(), "cuisine".to_owned()),
            ("q".to_owned(), "crème brûlée".to_owned()),
        ].into_iter().collect::<HashMap<_, _>>();

        assert_eq!(QueryString::from(buf), QueryString { items: expected });
    }

    #[test]
    fn test_parse_key_only_query_str() {
        let buf = "key-only";
        let expected: HashMap<String, String> = vec![("key-only".to_string(), "".to_string())].into_iter().collect();
        assert_eq!(QueryString::from(buf), QueryString { items: expected });
    }
}
