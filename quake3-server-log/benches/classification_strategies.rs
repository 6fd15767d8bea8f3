//! Compares the performance of Regular Expressions and `std::str` functions to classify Quake3 server log lines
//! to help us decide on the implementation strategy, which, for this project should be a reasonable balance
//! between performance and simplicity.
//!
//! The task of classifying a log line has been broken down in 2 parts for the measurements here:
//!   1) Detecting game starts
//!   2) Extracting killer & victim out of `Kill` lines
//!
//! The library ships the `Regex` strategy: the line signatures are the contract and regular expressions
//! express them directly, without having to reason about which occurrence of each delimiter to split at.

use criterion::{criterion_group, criterion_main, Criterion, black_box};
use quake3_server_log::{as_kill, is_game_start, Kill};

const LOG_EXCERPT: &[&str] = &[
    r#"  0:37 ------------------------------------------------------------"#,
    r#"  1:47 InitGame: \sv_floodProtect\1\sv_maxPing\0\sv_minPing\0\sv_maxRate\10000\sv_minRate\0\sv_hostname\Code Miner Server\g_gametype\0\sv_privateClients\2\sv_maxclients\16\sv_allowDownload\0\bot_minplayers\0\dmflags\0\fraglimit\20\timelimit\15\g_maxGameClients\0\capturelimit\8\version\ioq3 1.36 linux-x86_64 Apr 12 2009\protocol\68\mapname\q3dm17\gamename\baseq3\g_needpass\0"#,
    r#"  2:33 ClientConnect: 2"#,
    r#"  2:33 ClientUserinfoChanged: 2 n\Isgalamido\t\1\model\uriel/zael\hmodel\uriel/zael\g_redteam\\g_blueteam\\c1\5\c2\5\hc\100\w\0\l\0\tt\0\tl\0"#,
    r#"  2:33 ClientBegin: 2"#,
    r#"  2:36 Item: 2 ammo_rockets"#,
    r#"  2:40 Kill: 2 3 7: Isgalamido killed Dono da Bola by MOD_ROCKET_SPLASH"#,
    r#" 20:54 Kill: 1022 2 22: <world> killed Isgalamido by MOD_TRIGGER_HURT"#,
    r#"981:26 say: Isgalamido: team blue"#,
    r#" 10:12 score: 77  ping: 3  client: 2 Isgalamido"#,
    r#" 10:28 ShutdownGame:"#,
];


// Our implementation candidates
////////////////////////////////

fn split_is_game_start(log_line: &str) -> bool {
    log_line.split_whitespace()
        .any(|word| word.starts_with("InitGame:"))
}

fn split_as_kill(log_line: &str) -> Option<Kill<'_>> {
    let (_, data) = log_line.split_once("Kill:")?;
    let (_, text_description) = data.rsplit_once(": ")?;
    let (names, _) = text_description.rsplit_once(" by")?;
    let (killer, victim) = names.rsplit_once(" killed ")?;
    Some(Kill { killer, victim })
}

/// Benchmarks the line classification strategies
fn bench_classification(criterion: &mut Criterion) {

    let mut group = criterion.benchmark_group("Line Classification");

    let bench_id = "regex classification";
    group.bench_function(bench_id, |bencher| bencher.iter(|| {
        for log_line in LOG_EXCERPT {
            black_box(is_game_start(log_line));
            black_box(as_kill(log_line));
        }
    }));

    let bench_id = "split classification";
    group.bench_function(bench_id, |bencher| bencher.iter(|| {
        for log_line in LOG_EXCERPT {
            black_box(split_is_game_start(log_line));
            black_box(split_as_kill(log_line));
        }
    }));

    group.finish();
}

criterion_group!(benches, bench_classification);
criterion_main!(benches);
