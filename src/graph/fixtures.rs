//! Small hand-built graphs

use super::store::{GraphResult, SocialGraph};

const PRACTICE_EDGES: &[(&str, &str)] = &[
    ("A", "C"),
    ("A", "B"),
    ("B", "C"),
    ("B", "D"),
    ("D", "C"),
    ("D", "E"),
    ("D", "F"),
    ("C", "F"),
];

const ROMEO_AND_JULIET_EDGES: &[(&str, &str)] = &[
    ("Nurse", "Juliet"),
    ("Juliet", "Capulet"),
    ("Juliet", "Tybalt"),
    ("Tybalt", "Capulet"),
    ("Juliet", "Romeo"),
    ("Juliet", "Friar Laurence"),
    ("Romeo", "Friar Laurence"),
    ("Romeo", "Benvolio"),
    ("Benvolio", "Montague"),
    ("Montague", "Romeo"),
    ("Romeo", "Mercutio"),
    ("Montague", "Escalus"),
    ("Escalus", "Mercutio"),
    ("Escalus", "Paris"),
    ("Paris", "Mercutio"),
    ("Paris", "Capulet"),
    ("Escalus", "Capulet"),
];

fn build(edges: &[(&str, &str)]) -> GraphResult<SocialGraph<String>> {
    SocialGraph::from_edges(edges.iter().map(|(u, v)| (u.to_string(), v.to_string())))
}

/// Six-person practice graph
pub fn practice_graph() -> GraphResult<SocialGraph<String>> {
    build(PRACTICE_EDGES)
}

/// Characters of Romeo and Juliet and who knows whom
pub fn romeo_and_juliet_graph() -> GraphResult<SocialGraph<String>> {
    build(ROMEO_AND_JULIET_EDGES)
}
