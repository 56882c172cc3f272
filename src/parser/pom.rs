//! `<dependency>` block extraction from pom.xml content around a cursor line.
//!
//! Block bounds are found by plain substring search, so the joined text is
//! not guaranteed to be well-formed XML. Any structural problem is treated
//! as "no dependency here" rather than an error.

use crate::domain::Dependency;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesRef, Event};
use quick_xml::Reader;
use tracing::debug;

const BLOCK_START: &str = "<dependency>";
const BLOCK_END: &str = "</dependency>";

/// Text of the first groupId / artifactId / version element in a block
#[derive(Debug, Default, PartialEq, Eq)]
struct BlockFields {
    group_id: Option<String>,
    artifact_id: Option<String>,
    version: Option<String>,
}

impl BlockFields {
    fn slot(&mut self, tag: &str) -> Option<&mut Option<String>> {
        match tag {
            "groupId" => Some(&mut self.group_id),
            "artifactId" => Some(&mut self.artifact_id),
            "version" => Some(&mut self.version),
            _ => None,
        }
    }
}

/// Element whose text content is being collected
struct Capture {
    tag: String,
    depth: usize,
    text: String,
}

/// Find the `<dependency>` block enclosing `cursor`
///
/// Scans backward (inclusive) for the opening tag and forward (inclusive) for
/// the closing tag. Returns inclusive line bounds.
pub fn find_dependency_block<S: AsRef<str>>(lines: &[S], cursor: usize) -> Option<(usize, usize)> {
    if cursor >= lines.len() {
        return None;
    }

    let start = (0..=cursor)
        .rev()
        .find(|&i| lines[i].as_ref().contains(BLOCK_START))?;
    let end = (cursor..lines.len()).find(|&i| lines[i].as_ref().contains(BLOCK_END))?;

    if start <= cursor && cursor <= end {
        Some((start, end))
    } else {
        None
    }
}

/// Extract the dependency declared by the block enclosing `cursor`
///
/// Versions are returned literally; POM `${property}` placeholders are not
/// resolved here.
pub fn extract_pom_dependency<S: AsRef<str>>(lines: &[S], cursor: usize) -> Option<Dependency> {
    let (start, end) = find_dependency_block(lines, cursor)?;
    let block = lines[start..=end]
        .iter()
        .map(|line| line.as_ref())
        .collect::<Vec<_>>()
        .join("\n");

    let fields = match parse_block(&block) {
        Ok(fields) => fields,
        Err(message) => {
            debug!(start, end, %message, "ignoring malformed dependency block");
            return None;
        }
    };

    Dependency::new(
        fields.group_id.unwrap_or_default(),
        fields.artifact_id.unwrap_or_default(),
        fields.version,
    )
}

fn parse_block(xml: &str) -> Result<BlockFields, String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut fields = BlockFields::default();
    let mut capture: Option<Capture> = None;
    let mut depth = 0usize;
    let mut root_seen = false;

    loop {
        let event = reader.read_event().map_err(|e| e.to_string())?;

        match event {
            Event::Start(ref e) => {
                if depth == 0 {
                    if root_seen {
                        return Err("more than one root element".to_string());
                    }
                    root_seen = true;
                }
                depth += 1;

                let tag = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                if capture.is_none() && fields.slot(&tag).is_some_and(|slot| slot.is_none()) {
                    capture = Some(Capture {
                        tag,
                        depth,
                        text: String::new(),
                    });
                }
            }
            Event::Empty(ref e) => {
                if depth == 0 {
                    if root_seen {
                        return Err("more than one root element".to_string());
                    }
                    root_seen = true;
                }

                let tag = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                if capture.is_none() {
                    if let Some(slot) = fields.slot(&tag) {
                        if slot.is_none() {
                            *slot = Some(String::new());
                        }
                    }
                }
            }
            Event::End(_) => {
                if depth == 0 {
                    return Err("closing tag without an opening tag".to_string());
                }
                if capture.as_ref().is_some_and(|c| c.depth == depth) {
                    if let Some(done) = capture.take() {
                        if let Some(slot) = fields.slot(&done.tag) {
                            *slot = Some(done.text.trim().to_string());
                        }
                    }
                }
                depth -= 1;
            }
            Event::Text(ref e) => {
                let text = e.decode().map_err(|err| err.to_string())?;
                if depth == 0 {
                    if !text.trim().is_empty() {
                        return Err("text outside the root element".to_string());
                    }
                } else if let Some(c) = capture.as_mut() {
                    c.text.push_str(&text);
                }
            }
            Event::CData(ref e) => {
                if let Some(c) = capture.as_mut() {
                    c.text.push_str(&String::from_utf8_lossy(&e[..]));
                }
            }
            Event::GeneralRef(ref e) => {
                let resolved = resolve_reference(e)?;
                if depth == 0 {
                    return Err("entity reference outside the root element".to_string());
                }
                if let Some(c) = capture.as_mut() {
                    c.text.push_str(&resolved);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if depth != 0 {
        return Err(format!("{} unclosed element(s)", depth));
    }
    if !root_seen {
        return Err("no root element".to_string());
    }

    Ok(fields)
}

/// Resolve `&name;` to its text: character references and predefined entities
fn resolve_reference(reference: &BytesRef<'_>) -> Result<String, String> {
    if let Some(ch) = reference.resolve_char_ref().map_err(|e| e.to_string())? {
        return Ok(ch.to_string());
    }
    let name = reference.decode().map_err(|e| e.to_string())?;
    resolve_predefined_entity(&name)
        .map(String::from)
        .ok_or_else(|| format!("unknown entity '&{};'", name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_block() -> Vec<&'static str> {
        vec![
            "<dependency>",
            "<groupId>org.example</groupId>",
            "<artifactId>lib</artifactId>",
            "<version>1.0</version>",
            "</dependency>",
        ]
    }

    #[test]
    fn test_extract_from_any_line_in_block() {
        let lines = sample_block();
        let expected = Dependency::new("org.example", "lib", Some("1.0".to_string()));
        for cursor in 0..lines.len() {
            assert_eq!(extract_pom_dependency(&lines, cursor), expected, "cursor {cursor}");
        }
    }

    #[test]
    fn test_find_block_bounds() {
        let lines = vec![
            "<dependencies>",
            "<dependency>",
            "<groupId>a</groupId>",
            "<artifactId>b</artifactId>",
            "</dependency>",
            "</dependencies>",
        ];
        assert_eq!(find_dependency_block(&lines, 2), Some((1, 4)));
        assert_eq!(find_dependency_block(&lines, 0), None);
        assert_eq!(find_dependency_block(&lines, 5), None);
        assert_eq!(find_dependency_block(&lines, 99), None);
    }

    #[test]
    fn test_cursor_outside_any_block() {
        let lines = vec![
            "<project>",
            "<modelVersion>4.0.0</modelVersion>",
            "<dependencies>",
            "<dependency>",
            "<groupId>a</groupId>",
            "<artifactId>b</artifactId>",
            "</dependency>",
            "</dependencies>",
            "</project>",
        ];
        assert!(extract_pom_dependency(&lines, 1).is_none());
        assert!(extract_pom_dependency(&lines, 8).is_none());
        assert!(extract_pom_dependency(&lines, 5).is_some());
    }

    #[test]
    fn test_cursor_between_blocks() {
        let lines = vec![
            "<dependency>",
            "<groupId>a</groupId>",
            "<artifactId>b</artifactId>",
            "</dependency>",
            "<!-- between -->",
            "<dependency>",
            "<groupId>c</groupId>",
            "<artifactId>d</artifactId>",
            "</dependency>",
        ];
        assert!(extract_pom_dependency(&lines, 4).is_none());
        assert_eq!(
            extract_pom_dependency(&lines, 6),
            Dependency::new("c", "d", None)
        );
    }

    #[test]
    fn test_version_is_optional() {
        let lines = vec![
            "<dependency>",
            "<groupId>org.example</groupId>",
            "<artifactId>lib</artifactId>",
            "</dependency>",
        ];
        let dep = extract_pom_dependency(&lines, 1).unwrap();
        assert_eq!(dep.version(), None);
    }

    #[test]
    fn test_property_placeholder_is_not_resolved() {
        let lines = vec![
            "<dependency>",
            "<groupId>org.example</groupId>",
            "<artifactId>lib</artifactId>",
            "<version>${lib.version}</version>",
            "</dependency>",
        ];
        let dep = extract_pom_dependency(&lines, 3).unwrap();
        assert_eq!(dep.version(), Some("${lib.version}"));
    }

    #[test]
    fn test_missing_artifact_is_invalid() {
        let lines = vec![
            "<dependency>",
            "<groupId>org.example</groupId>",
            "<artifactId></artifactId>",
            "</dependency>",
        ];
        assert!(extract_pom_dependency(&lines, 1).is_none());
    }

    #[test]
    fn test_single_line_block() {
        let lines = vec![
            "<dependency><groupId>g</groupId><artifactId>a</artifactId><version>2</version></dependency>",
        ];
        assert_eq!(
            extract_pom_dependency(&lines, 0),
            Dependency::new("g", "a", Some("2".to_string()))
        );
    }

    #[test]
    fn test_first_element_in_document_order_wins() {
        let lines = vec![
            "<dependency>",
            "<groupId>first.group</groupId>",
            "<artifactId>lib</artifactId>",
            "<exclusions>",
            "<exclusion>",
            "<groupId>excluded.group</groupId>",
            "<artifactId>excluded</artifactId>",
            "</exclusion>",
            "</exclusions>",
            "</dependency>",
        ];
        let dep = extract_pom_dependency(&lines, 6).unwrap();
        assert_eq!(dep.group(), "first.group");
        assert_eq!(dep.artifact(), "lib");
    }

    #[test]
    fn test_nested_field_counts() {
        let lines = vec![
            "<dependency>",
            "<coords><groupId>g</groupId></coords>",
            "<artifactId>a</artifactId>",
            "</dependency>",
        ];
        assert_eq!(extract_pom_dependency(&lines, 1), Dependency::new("g", "a", None));
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let lines = vec![
            "<dependency>",
            "<groupId>",
            "org.example",
            "</groupId>",
            "<artifactId> lib </artifactId>",
            "</dependency>",
        ];
        assert_eq!(
            extract_pom_dependency(&lines, 2),
            Dependency::new("org.example", "lib", None)
        );
    }

    #[test]
    fn test_entities_are_decoded() {
        let lines = vec![
            "<dependency>",
            "<groupId>org.a&amp;b</groupId>",
            "<artifactId>lib&#45;x</artifactId>",
            "</dependency>",
        ];
        let dep = extract_pom_dependency(&lines, 1).unwrap();
        assert_eq!(dep.group(), "org.a&b");
        assert_eq!(dep.artifact(), "lib-x");
    }

    #[test]
    fn test_malformed_mismatched_tags() {
        let lines = vec![
            "<dependency>",
            "<groupId>org.example</artifactId>",
            "<artifactId>lib</artifactId>",
            "</dependency>",
        ];
        assert!(extract_pom_dependency(&lines, 1).is_none());
    }

    #[test]
    fn test_malformed_unclosed_tag() {
        let lines = vec![
            "<dependency>",
            "<groupId>org.example",
            "<artifactId>lib</artifactId>",
            "</dependency>",
        ];
        assert!(extract_pom_dependency(&lines, 1).is_none());
    }

    #[test]
    fn test_malformed_unknown_entity() {
        let lines = vec![
            "<dependency>",
            "<groupId>org.&bogus;</groupId>",
            "<artifactId>lib</artifactId>",
            "</dependency>",
        ];
        assert!(extract_pom_dependency(&lines, 1).is_none());
    }

    #[test]
    fn test_opening_line_with_outer_tag_is_malformed() {
        let lines = vec![
            "<dependencies><dependency>",
            "<groupId>g</groupId>",
            "<artifactId>a</artifactId>",
            "</dependency>",
        ];
        assert!(extract_pom_dependency(&lines, 1).is_none());
    }

    #[test]
    fn test_empty_version_element_is_absent() {
        let lines = vec![
            "<dependency>",
            "<groupId>g</groupId>",
            "<artifactId>a</artifactId>",
            "<version/>",
            "</dependency>",
        ];
        assert_eq!(extract_pom_dependency(&lines, 1), Dependency::new("g", "a", None));
    }

    #[test]
    fn test_character_references_are_decoded() {
        let lines = vec![
            "<dependency>",
            "<groupId>org&#46;example</groupId>",
            "<artifactId>&#x6C;ib&lt;x&gt;</artifactId>",
            "</dependency>",
        ];
        let dep = extract_pom_dependency(&lines, 1).unwrap();
        assert_eq!(dep.group(), "org.example");
        assert_eq!(dep.artifact(), "lib<x>");
    }

    #[test]
    fn test_invalid_character_reference_is_malformed() {
        let lines = vec![
            "<dependency>",
            "<groupId>a&#xZZ;</groupId>",
            "<artifactId>b</artifactId>",
            "</dependency>",
        ];
        assert!(extract_pom_dependency(&lines, 1).is_none());
    }
}
