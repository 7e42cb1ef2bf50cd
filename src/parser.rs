use std::fs;

use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{char, digit1, space0};
use nom::combinator::{all_consuming, map, map_res};
use nom::sequence::{delimited, preceded, separated_pair};

use crate::color::VertexId;
use crate::error::InstanceError;
use crate::graph::Instance;

/** a parsed instance file: the graph plus the color bound K */
#[derive(Debug)]
pub struct InstanceFile {
    /// the coloring instance (deduplicated, self-loop-free)
    pub instance: Instance,
    /// color bound K (legal colors are 0..K)
    pub nb_colors: usize,
}

/// content of a single non-empty, non-comment line
#[derive(Debug, PartialEq, Eq)]
enum Line {
    Colors(usize),
    Edge(VertexId, VertexId),
}

/// reads an unsigned integer
fn number(s: &str) -> IResult<&str, usize> {
    map_res(digit1, str::parse)(s)
}

/// reads a `colors=K` directive (spaces around '=' tolerated)
fn colors_line(s: &str) -> IResult<&str, Line> {
    map(
        preceded(tag("colors"), preceded(delimited(space0, char('='), space0), number)),
        Line::Colors,
    )(s)
}

/// reads an `a,b` edge declaration (spaces around ',' tolerated)
fn edge_line(s: &str) -> IResult<&str, Line> {
    map(
        separated_pair(number, delimited(space0, char(','), space0), number),
        |(a, b)| Line::Edge(a, b),
    )(s)
}

/**
parses an instance from its textual description:
 - blank lines and lines starting with `#` are ignored
 - `colors=K` sets the color bound (exactly one such directive, K > 0)
 - every other line is `a,b`, an undirected edge; self-loops are
   discarded, duplicate and reversed edges collapse to one
 - the vertex set is the union of the surviving endpoints
*/
pub fn from_str(content: &str) -> Result<InstanceFile, InstanceError> {
    let mut edges: Vec<(VertexId, VertexId)> = Vec::new();
    let mut color_bound: Option<usize> = None;
    for (i, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        match all_consuming(alt((colors_line, edge_line)))(line) {
            Ok((_, Line::Colors(k))) => {
                if color_bound.is_some() {
                    return Err(InstanceError::Config(
                        "duplicate colors= directive".to_string()
                    ));
                }
                if k == 0 {
                    return Err(InstanceError::Config(
                        "colors= must be a positive integer".to_string()
                    ));
                }
                color_bound = Some(k);
            }
            Ok((_, Line::Edge(a, b))) => { edges.push((a, b)); }
            Err(_) => {
                return Err(InstanceError::Parse {
                    line_no: i + 1,
                    line: line.to_string(),
                });
            }
        }
    }
    let nb_colors = color_bound.ok_or_else(|| InstanceError::Config(
        "missing colors= directive".to_string()
    ))?;
    Ok(InstanceFile { instance: Instance::from_edges(&edges), nb_colors })
}

/// reads an instance from a file
pub fn from_file(filename: &str) -> Result<InstanceFile, InstanceError> {
    let content = fs::read_to_string(filename)?.replace('\r', "");
    from_str(&content)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let inst_file = from_str("colors=3\n1,2\n2,3\n3,1").unwrap();
        assert_eq!(inst_file.nb_colors, 3);
        assert_eq!(inst_file.instance.vertices(), &[1,2,3]);
        assert_eq!(inst_file.instance.m(), 3);
    }

    #[test]
    fn test_parse_comments_and_blanks() {
        let content = "# a comment\n\ncolors=4\n# another\n1,2\n2,3\n3,4\n4,1";
        let inst_file = from_str(content).unwrap();
        assert_eq!(inst_file.nb_colors, 4);
        assert_eq!(inst_file.instance.vertices(), &[1,2,3,4]);
        assert_eq!(inst_file.instance.m(), 4);
    }

    #[test]
    fn test_parse_self_loops_discarded() {
        let inst_file = from_str("colors=2\n1,1\n1,2\n2,2").unwrap();
        assert_eq!(inst_file.instance.vertices(), &[1,2]);
        assert_eq!(inst_file.instance.m(), 1);
    }

    #[test]
    fn test_parse_duplicate_edges() {
        let inst_file = from_str("colors=3\n1,2\n2,1\n1,3").unwrap();
        assert_eq!(inst_file.instance.m(), 2);
    }

    #[test]
    fn test_parse_spaces_tolerated() {
        let inst_file = from_str("colors = 3\n  1 , 2  \n2,3").unwrap();
        assert_eq!(inst_file.nb_colors, 3);
        assert_eq!(inst_file.instance.m(), 2);
    }

    #[test]
    fn test_parse_missing_colors() {
        match from_str("1,2\n2,3") {
            Err(InstanceError::Config(_)) => {}
            other => panic!("expected a config error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_duplicate_colors_directive() {
        match from_str("colors=2\ncolors=3\n1,2") {
            Err(InstanceError::Config(_)) => {}
            other => panic!("expected a config error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_zero_colors() {
        match from_str("colors=0\n1,2") {
            Err(InstanceError::Config(_)) => {}
            other => panic!("expected a config error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_malformed_edge() {
        match from_str("colors=2\n1,2\n1;3") {
            Err(InstanceError::Parse { line_no: 3, .. }) => {}
            other => panic!("expected a parse error on line 3, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_wrong_arity() {
        match from_str("colors=2\n1,2,3") {
            Err(InstanceError::Parse { line_no: 2, .. }) => {}
            other => panic!("expected a parse error on line 2, got {:?}", other),
        }
    }

    #[test]
    fn test_read_instance_file() {
        let inst_file = from_file("insts/triangle").unwrap();
        assert_eq!(inst_file.nb_colors, 3);
        assert_eq!(inst_file.instance.n(), 3);
        assert_eq!(inst_file.instance.m(), 3);
    }

    #[test]
    fn test_read_missing_file() {
        match from_file("insts/does_not_exist") {
            Err(InstanceError::Io(_)) => {}
            other => panic!("expected an io error, got {:?}", other),
        }
    }
}
