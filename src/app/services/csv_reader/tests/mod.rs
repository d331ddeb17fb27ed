//! Test utilities for reading-log CSV parser testing
//!
//! Shared fixtures used across the parser test modules.

use crate::app::services::csv_reader::tokenize;

mod column_mapping_tests;
mod series_tests;

/// Tokenize a comma-separated header or row
pub fn cells(line: &str) -> Vec<String> {
    tokenize(line, ',')
}

/// Reading log in the shape of a typical Brazilian spreadsheet export
pub fn create_test_reading_log() -> String {
    "Retrospectiva 2024;;;;;;;\n\
     Título;Autor;Editora;Páginas;Nota;Favorito;Tipo;Série\n\
     O Nome do Vento;Patrick Rothfuss;Arqueiro;\"1.056\";⭐⭐⭐⭐⭐;sim;Trilogia;A Crônica do Matador do Rei #1\n\
     O Temor do Sábio;Patrick Rothfuss;Arqueiro;1.200;4,5;;Trilogia;A Crônica do Matador do Rei #2\n\
     Torto Arado;Itamar Vieira Junior;Todavia;264;4;x;Único;\n\
     ;;;;;;;\n\
     Duna;Frank Herbert;Aleph;680;abandonado;;Saga;Duna\n"
        .to_string()
}
