//! Cartouche - 텍스트를 이집트 상형문자로 음역하는 CLI

use std::path::{Path, PathBuf};
use std::process;

use cartouche::config::{load_config, load_config_from, CartoucheConfig};
use cartouche::glyph::{check_integrity, PhonemeMap, SymbolCatalog, TableError};
use cartouche::service::{serve, GlyphService, TranslateRequest};
use cartouche::{GlyphTables, Transliterator};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cartouche", about = "Transliterate text into Egyptian hieroglyphs")]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// 글리프 카탈로그 JSON 경로 (설정보다 우선)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// 음소 맵 JSON 경로 (설정보다 우선)
    #[arg(long, global = true)]
    phonemes: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Translate text into glyphs
    Translate {
        /// Text to translate
        text: String,
        /// Print the JSON response envelope
        #[arg(long)]
        json: bool,
    },
    /// Show how the text is segmented into phonemes
    Explain {
        /// Text to segment
        text: String,
    },
    /// Check catalog/phoneme map consistency
    Check,
    /// List every glyph in the catalog
    Glyphs,
    /// Serve line-delimited JSON requests on stdin/stdout
    Serve,
}

fn main() {
    // 로깅 초기화 (기본 warn, RUST_LOG로 변경)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config_from(path),
        None => load_config(),
    };
    let catalog_path = cli
        .catalog
        .clone()
        .or_else(|| config.catalog_path.as_ref().map(PathBuf::from));
    let phoneme_path = cli
        .phonemes
        .clone()
        .or_else(|| config.phoneme_map_path.as_ref().map(PathBuf::from));

    let catalog = catalog_path.as_deref();
    let phonemes = phoneme_path.as_deref();

    match cli.command {
        Command::Check => run_check(catalog, phonemes),
        Command::Translate { text, json } => {
            run_translate(load_engine(&config, catalog, phonemes), &text, json)
        }
        Command::Explain { text } => run_explain(&load_engine(&config, catalog, phonemes), &text),
        Command::Glyphs => run_glyphs(&load_engine(&config, catalog, phonemes)),
        Command::Serve => run_serve(load_engine(&config, catalog, phonemes)),
    }
}

fn load_engine(config: &CartoucheConfig, catalog: Option<&Path>, phonemes: Option<&Path>) -> Transliterator {
    let tables = GlyphTables::load(catalog, phonemes, config.integrity).unwrap_or_else(|e| {
        eprintln!("테이블 로드 실패: {}", e);
        process::exit(1);
    });
    Transliterator::new(tables)
}

fn run_translate(engine: Transliterator, text: &str, json: bool) {
    let request = TranslateRequest::from_text(text).unwrap_or_else(|e| {
        eprintln!("{}", e);
        process::exit(2);
    });

    if json {
        let service = GlyphService::new(engine);
        let payload = serde_json::json!({ "text": request.original_text });
        let output = service
            .translate(&payload)
            .map_err(|e| e.to_string())
            .and_then(|r| serde_json::to_string_pretty(&r).map_err(|e| e.to_string()));
        match output {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("{}", e);
                process::exit(1);
            }
        }
        return;
    }

    let glyphs = engine.translate(&request.sanitized_text);
    let line: String = glyphs.iter().filter_map(|g| g.display_text()).collect();
    println!("{}", line);
    for g in &glyphs {
        println!("  {:<6} {:<4} {}", g.id, g.phonetic_value, g.description);
    }
}

fn run_explain(engine: &Transliterator, text: &str) {
    for seg in engine.segment(text) {
        println!(
            "  @{:<4} {:<4} -> {}",
            seg.start,
            seg.phoneme,
            seg.glyph_id.unwrap_or("-")
        );
    }
}

fn run_glyphs(engine: &Transliterator) {
    for g in engine.tables().catalog().iter() {
        println!(
            "{:<6} {} {:<4} {:<32} {}",
            g.id,
            g.display_text().unwrap_or_default(),
            g.phonetic_value,
            g.description,
            g.category
        );
    }
}

fn run_serve(engine: Transliterator) {
    let service = GlyphService::new(engine);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    if let Err(e) = serve(&service, stdin.lock(), stdout.lock()) {
        log::error!("요청 루프 오류: {}", e);
        process::exit(1);
    }
}

/// 무결성 정책을 적용하기 전의 원본 테이블 읽기
fn read_raw_tables(
    catalog_path: Option<&Path>,
    phoneme_path: Option<&Path>,
) -> Result<(SymbolCatalog, PhonemeMap), TableError> {
    let embedded = GlyphTables::embedded()?;
    let catalog = match catalog_path {
        Some(path) => SymbolCatalog::load(path)?,
        None => embedded.catalog().clone(),
    };
    let phonemes = match phoneme_path {
        Some(path) => PhonemeMap::load(path)?,
        None => embedded.phonemes().clone(),
    };
    Ok((catalog, phonemes))
}

/// 무결성 정책과 무관하게 원본 테이블을 검사하고 위반이 있으면 종료 코드 1
fn run_check(catalog_path: Option<&Path>, phoneme_path: Option<&Path>) {
    let (catalog, phonemes) = read_raw_tables(catalog_path, phoneme_path).unwrap_or_else(|e| {
        eprintln!("테이블 로드 실패: {}", e);
        process::exit(1);
    });

    let violations = check_integrity(&catalog, &phonemes);
    if violations.is_empty() {
        println!("OK: 글리프 {}개, 음소 {}개", catalog.len(), phonemes.len());
        return;
    }

    for v in &violations {
        println!("  - {}", v);
    }
    eprintln!("무결성 위반 {}건", violations.len());
    process::exit(1);
}
