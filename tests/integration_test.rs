mod common;

use std::io::Cursor;
use std::sync::atomic::Ordering;
use std::time::Duration;

use aula_test_player::utils::logging;
use aula_test_player::{
    AppError, LoadError, PlayerOutcome, QuestionSetLoader, QuestionSource, ResultSummary,
    TestPlayer,
};
use common::{serve, serve_hung, three_questions_json, write_temp_json, Route};

fn loader() -> QuestionSetLoader {
    QuestionSetLoader::with_timeout(Duration::from_secs(2))
}

async fn run_player(
    source: QuestionSource,
    input: &str,
) -> (Result<PlayerOutcome, AppError>, String) {
    let mut output = Vec::new();
    let result = {
        let mut player = TestPlayer::new(
            loader(),
            source,
            Cursor::new(input.as_bytes().to_vec()),
            &mut output,
        );
        player.run().await
    };
    (result, String::from_utf8(output).unwrap())
}

#[tokio::test]
async fn test_load_remote_question_set() {
    logging::init("debug");
    let (base, _) = serve(vec![Route::ok("/tests/t1.json", three_questions_json())]).await;

    let questions = loader()
        .load_from(&format!("{}/tests/t1.json", base))
        .await
        .unwrap();

    assert_eq!(questions.len(), 3);
    assert_eq!(questions[1].correct_option_index, 1);
    assert!(questions[0].explanation.is_some());
}

#[tokio::test]
async fn test_load_remote_bad_status() {
    let (base, _) = serve(vec![]).await;

    let err = loader()
        .load_from(&format!("{}/missing.json", base))
        .await
        .unwrap_err();

    assert!(matches!(err, LoadError::BadStatus { status: 404, .. }));
}

#[tokio::test]
async fn test_load_remote_empty_set() {
    let (base, _) = serve(vec![Route::ok("/empty.json", "[]")]).await;

    let err = loader()
        .load_from(&format!("{}/empty.json", base))
        .await
        .unwrap_err();

    assert!(matches!(err, LoadError::EmptyQuestionSet));
}

#[tokio::test]
async fn test_load_remote_timeout() {
    let base = serve_hung().await;
    let loader = QuestionSetLoader::with_timeout(Duration::from_secs(1));

    let err = loader
        .load_from(&format!("{}/slow.json", base))
        .await
        .unwrap_err();

    assert!(matches!(err, LoadError::Timeout { secs: 1, .. }));
}

#[tokio::test]
async fn test_player_full_run_from_file() {
    let path = write_temp_json("full_run", &three_questions_json());

    // 第一题答对，第二题答错，第三题答对，然后退出
    let (result, output) = run_player(QuestionSource::File(path), "1\n\n4\n\n3\n\ns\n").await;

    assert_eq!(
        result.unwrap(),
        PlayerOutcome::Finished(ResultSummary::new(2, 3))
    );
    assert!(output.contains("Pregunta 1/3"));
    assert!(output.contains("Pregunta 3/3"));
    assert!(output.contains("España se constituye en un Estado social."));
    assert!(output.contains("[Enter] Finalizar"));
    assert!(output.contains("Has sacado un 7"));
    assert!(output.contains("Aciertos: 2 de 3"));
    assert!(output.contains("✔ APTO"));
}

#[tokio::test]
async fn test_player_rejects_invalid_option() {
    let path = write_temp_json(
        "invalid_option",
        r#"[{"question": "¿2+2?", "options": ["3", "4", "5", "6"], "correctAnswer": 1}]"#,
    );

    let (result, output) = run_player(QuestionSource::File(path), "5\nabc\n2\n\ns\n").await;

    assert_eq!(
        result.unwrap(),
        PlayerOutcome::Finished(ResultSummary::new(1, 1))
    );
    assert!(output.contains("Opción no válida."));
    assert!(output.contains("Escribe el número de una opción."));
    assert!(output.contains("Has sacado un 10"));
}

#[tokio::test]
async fn test_player_failing_run() {
    let path = write_temp_json("failing_run", &three_questions_json());

    let (result, output) = run_player(QuestionSource::File(path), "2\n\n1\n\n1\n\n").await;

    let PlayerOutcome::Finished(summary) = result.unwrap() else {
        panic!("expected finished outcome");
    };
    assert_eq!(summary.score, 0);
    assert_eq!(summary.mark, 0);
    assert!(!summary.is_pass());
    assert!(output.contains("✘ NO APTO"));
}

#[tokio::test]
async fn test_player_restart_reloads_source() {
    let (base, hits) = serve(vec![Route::ok(
        "/t.json",
        r#"[{"question": "¿Sí?", "options": ["sí", "no"], "correctAnswer": 0}]"#,
    )])
    .await;
    let source = QuestionSource::parse(&format!("{}/t.json", base));

    // 第一次答错，重做后答对
    let (result, output) = run_player(source, "2\n\nr\n1\n\ns\n").await;

    assert_eq!(
        result.unwrap(),
        PlayerOutcome::Finished(ResultSummary::new(1, 1))
    );
    assert_eq!(hits.load(Ordering::SeqCst), 2);
    assert_eq!(output.matches("Cargando Test...").count(), 2);
    assert!(output.contains("Has sacado un 0"));
    assert!(output.contains("Has sacado un 10"));
}

#[tokio::test]
async fn test_player_closed_midway() {
    let path = write_temp_json("closed_midway", &three_questions_json());

    let (result, output) = run_player(QuestionSource::File(path.clone()), "1\nq\n").await;
    assert_eq!(result.unwrap(), PlayerOutcome::Closed);
    assert!(!output.contains("Has sacado"));

    // 输入提前结束同样视为关闭
    let (result, _) = run_player(QuestionSource::File(path), "1\n\n").await;
    assert_eq!(result.unwrap(), PlayerOutcome::Closed);
}

#[tokio::test]
async fn test_player_load_failure_closes() {
    let path = write_temp_json("empty_set", "[]");

    let (result, output) = run_player(QuestionSource::File(path), "1\n").await;

    assert!(matches!(
        result,
        Err(AppError::Load(LoadError::EmptyQuestionSet))
    ));
    assert!(output.contains("Error al cargar el archivo del test."));
    assert!(!output.contains("Pregunta"));
}
