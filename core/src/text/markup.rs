use nom::{
    branch::alt,
    bytes::complete::{is_not, tag},
    character::complete::char,
    combinator::{map, recognize},
    multi::fold_many0,
    sequence::delimited,
    Parser,
};

type IResult<I, O> = nom::IResult<I, O, nom::error::Error<I>>;

#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    Markup,
}

fn markup_tag(input: &str) -> IResult<&str, &str> {
    recognize(delimited(char('<'), is_not(">"), char('>'))).parse(input)
}

fn segment(input: &str) -> IResult<&str, Segment<'_>> {
    alt((
        map(markup_tag, |_| Segment::Markup),
        map(is_not("<"), Segment::Text),
        // a '<' that never closes is plain text
        map(tag("<"), Segment::Text),
    ))
    .parse(input)
}

/// Removes every `<...>` sequence and keeps everything else verbatim.
pub fn strip_tags(input: &str) -> String {
    fold_many0(segment, String::new, |mut acc, seg| {
        if let Segment::Text(t) = seg {
            acc.push_str(t);
        }
        acc
    })
    .parse(input)
    .map(|(_, out)| out)
    .unwrap_or_else(|_| input.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_tag() {
        let (rest, t) = markup_tag("<a href=\"/x\">link</a>").unwrap();
        assert_eq!(t, "<a href=\"/x\">");
        assert_eq!(rest, "link</a>");
        assert!(markup_tag("<>").is_err());
        assert!(markup_tag("plain").is_err());
    }

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("<p>Hello <b>world</b></p>"), "Hello world");
        assert_eq!(strip_tags("no markup"), "no markup");
        assert_eq!(strip_tags("a < b and c<d"), "a < b and c<d");
        assert_eq!(strip_tags("x <> y"), "x <> y");
        assert_eq!(strip_tags(""), "");
    }
}
