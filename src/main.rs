use anyhow::{anyhow, Context, Result};
use flexi_logger::{AdaptiveFormat, Logger};
use log::info;
use pqueue::PriorityQueue;
use regex::Regex;
use std::{env, fs::File, io::Read, process};

mod linkedlist;
mod pqueue;

/*
 * Parse jobs from input and insert them into <pq>.
 * Input should be a list of lines, each formatted as follows :
 * <length>:<info>
 *
 * Blank lines are skipped. Returns the number of jobs inserted.
 */
fn load_jobs(input: &str, pq: &mut PriorityQueue) -> Result<usize> {
    let re = Regex::new(r"^\s*(-?\d+)\s*:\s*(.*?)\s*$")?;
    let mut count = 0;
    for (number, l) in input.lines().enumerate() {
        if l.trim().is_empty() {
            continue;
        }
        let captures = re
            .captures(l)
            .ok_or(anyhow!("Failed to parse line {} : {}", number + 1, l))?;
        let length: i64 = captures[1]
            .parse()
            .with_context(|| format!("Invalid job length on line {}", number + 1))?;
        pq.insert(length, &captures[2]);
        count += 1;
    }

    Ok(count)
}

fn main() -> Result<()> {
    let _logger = Logger::try_with_env_or_str("info")?
        .log_to_stdout()
        .adaptive_format_for_stdout(AdaptiveFormat::Default)
        .start()?;

    if env::args().len() != 3 {
        println!(
            "Usage : {} [jobs file] [large|small]",
            env::args().next().unwrap_or_else(|| "job-pqueue".to_string())
        );
        process::exit(1);
    }
    let mut args = env::args().skip(1);
    let path = args.next().context("Missing jobs file")?;
    let sort_order = args.next().context("Missing sort order")?;

    let mut pq = PriorityQueue::new(&sort_order).context("Failed to create queue")?;

    let mut f = File::open(&path).context("Failed to open file")?;
    let mut input = String::new();
    f.read_to_string(&mut input)
        .context("Failed to read file")?;
    let count = load_jobs(&input, &mut pq).context("Failed to load jobs")?;
    info!("Loaded {} jobs from {}, {} first", count, path, pq.sort_order());

    if let Some(head) = pq.peek() {
        info!("Next job : {} (length {})", head.info(), head.length());
    }
    println!("Queue :\n{}", pq);

    println!("Dequeued :");
    while let Some(job) = pq.get() {
        println!("{}", job);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pqueue::Job;

    #[test]
    fn load_and_drain() {
        let input = "10:foo
9:foo

7:foo
  6 : foo
5:foo
8:baz";
        let mut pq = PriorityQueue::new("large").unwrap();
        assert_eq!(load_jobs(input, &mut pq).unwrap(), 6);
        assert_eq!(pq.size(), 6);

        let mut all = vec![];
        while let Some(job) = pq.get() {
            all.push(job);
        }
        assert_eq!(
            all,
            vec![
                Job::new(10, "foo"),
                Job::new(9, "foo"),
                Job::new(8, "baz"),
                Job::new(7, "foo"),
                Job::new(6, "foo"),
                Job::new(5, "foo"),
            ]
        );
    }

    #[test]
    fn load_negative_and_empty_info() {
        let input = "-3:cold\n4:\n0:zero";
        let mut pq = PriorityQueue::new("small").unwrap();
        assert_eq!(load_jobs(input, &mut pq).unwrap(), 3);
        assert_eq!(pq.get(), Some(Job::new(-3, "cold")));
        assert_eq!(pq.get(), Some(Job::new(0, "zero")));
        assert_eq!(pq.get(), Some(Job::new(4, "")));
        assert!(pq.is_empty());
    }

    #[test]
    fn load_rejects_malformed_lines() {
        let mut pq = PriorityQueue::new("small").unwrap();
        assert!(load_jobs("1:ok\nnot a job", &mut pq).is_err());

        // Digits that overflow an i64
        let mut pq = PriorityQueue::new("small").unwrap();
        assert!(load_jobs("99999999999999999999:big", &mut pq).is_err());
    }
}
