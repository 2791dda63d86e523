use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use resolvent::{config::Config, context::Context, reports::Report};

fn problems_path() -> PathBuf {
    Path::new(".").join("tests").join("problems")
}

fn silent_problem_report(path: PathBuf) -> Report {
    let file = match File::open(&path) {
        Err(_) => panic!("Could not load {path:?}"),
        Ok(f) => f,
    };

    let mut ctx = Context::from_config(Config::default());
    if let Err(e) = ctx.read_problem(BufReader::new(&file)) {
        panic!("Could not read {path:?}: {e}");
    }

    ctx.saturate()
}

fn silent_on_directory(subdir: PathBuf, require: Report) -> usize {
    let mut count = 0;

    match std::fs::read_dir(subdir) {
        Err(_) => panic!("Problems missing"),
        Ok(dir) => {
            for problem in dir.flatten() {
                if problem
                    .path()
                    .extension()
                    .is_some_and(|extension| extension == "txt")
                {
                    assert_eq!(require, silent_problem_report(problem.path()), "{:?}", problem.path());
                    count += 1;
                }
            }
        }
    }

    count
}

#[test]
fn valid() {
    let count = silent_on_directory(problems_path().join("valid"), Report::Contradiction);
    assert_eq!(count, 7);
}

#[test]
fn fail() {
    let count = silent_on_directory(problems_path().join("fail"), Report::Saturated);
    assert_eq!(count, 5);
}
