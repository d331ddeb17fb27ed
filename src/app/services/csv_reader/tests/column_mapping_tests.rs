//! Tests for header resolution

use super::cells;
use crate::app::services::csv_reader::column_mapping::{Column, ColumnMapping, Field, find_column};
use crate::app::services::csv_reader::field_parsers::header_key;
use crate::Error;

#[test]
fn test_resolve_portuguese_header() {
    let header = cells("Título,Autor,Editora,Páginas,Notas");
    let mapping = ColumnMapping::resolve(&header).unwrap();

    assert_eq!(mapping.title, 0);
    assert_eq!(mapping.author, 1);
    assert_eq!(mapping.publisher, Column::Present(2));
    assert_eq!(mapping.pages, Column::Present(3));
    assert_eq!(mapping.rating, Column::Present(4));
    assert_eq!(mapping.series, Column::Absent);
    assert_eq!(mapping.required_width(), 2);
}

#[test]
fn test_resolve_is_order_independent() {
    let orders = [
        "Título,Autor,Editora,Páginas,Notas",
        "Notas,Páginas,Editora,Autor,Título",
        "Editora,Título,Notas,Autor,Páginas",
    ];

    for order in orders {
        let header = cells(order);
        let mapping = ColumnMapping::resolve(&header).unwrap();
        let position = |name: &str| header.iter().position(|h| h == name).unwrap();

        assert_eq!(mapping.title, position("Título"), "order: {}", order);
        assert_eq!(mapping.author, position("Autor"), "order: {}", order);
        assert_eq!(mapping.publisher, Column::Present(position("Editora")));
        assert_eq!(mapping.pages, Column::Present(position("Páginas")));
        assert_eq!(mapping.rating, Column::Present(position("Notas")));
    }
}

#[test]
fn test_resolve_english_synonyms() {
    let header = cells("Book Title,Author,Publisher,Pages,Rating,Favorite,Status,Format,Series,Volume,Year");
    let mapping = ColumnMapping::resolve(&header).unwrap();

    assert_eq!(mapping.title, 0);
    assert_eq!(mapping.author, 1);
    assert_eq!(mapping.favorite, Column::Present(5));
    assert_eq!(mapping.status, Column::Present(6));
    assert_eq!(mapping.format, Column::Present(7));
    assert_eq!(mapping.series, Column::Present(8));
    assert_eq!(mapping.volume, Column::Present(9));
    assert_eq!(mapping.year, Column::Present(10));
    assert!(mapping.absent_fields().is_empty());
}

#[test]
fn test_resolve_ignores_case_accents_and_spaces() {
    let header = cells("LIVRO,  Autora ,AVALIAÇÃO,Tipo de Livro,Nome da Série,Estado");
    let mapping = ColumnMapping::resolve(&header).unwrap();

    assert_eq!(mapping.title, 0);
    assert_eq!(mapping.author, 1);
    assert_eq!(mapping.rating, Column::Present(2));
    assert_eq!(mapping.format, Column::Present(3));
    assert_eq!(mapping.series, Column::Present(4));
    assert_eq!(mapping.status, Column::Present(5));
}

#[test]
fn test_fragment_priority_beats_position() {
    // "titulo" is tried before "livro", so the later "Título" column wins
    let normalized: Vec<String> = ["Livro favorito", "Título"]
        .iter()
        .map(|h| header_key(h))
        .collect();
    assert_eq!(find_column(&normalized, Field::Title.fragments()), Column::Present(1));
}

#[test]
fn test_missing_required_fields_are_named() {
    let header = cells("Editora,Páginas,Notas");
    match ColumnMapping::resolve(&header) {
        Err(Error::Schema { missing }) => assert_eq!(missing, vec!["title", "author"]),
        other => panic!("expected schema error, got {:?}", other),
    }

    let header = cells("Título,Editora");
    match ColumnMapping::resolve(&header) {
        Err(Error::Schema { missing }) => assert_eq!(missing, vec!["author"]),
        other => panic!("expected schema error, got {:?}", other),
    }
}

#[test]
fn test_column_cell_access() {
    let row = cells("Duna,Frank Herbert");
    assert_eq!(Column::Present(1).cell(&row), "Frank Herbert");
    assert_eq!(Column::Present(7).cell(&row), "");
    assert_eq!(Column::Absent.cell(&row), "");
}

#[test]
fn test_field_metadata() {
    assert!(Field::Title.is_required());
    assert!(Field::Author.is_required());
    assert!(!Field::Rating.is_required());
    assert_eq!(Field::Volume.to_string(), "volume");
    assert_eq!(Field::ALL.len(), 11);
}
