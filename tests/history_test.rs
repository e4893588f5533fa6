/*!
 * History and Playback Tests
 * Snapshot contents and frame navigation over real runs
 */

use pretty_assertions::assert_eq;
use rr_sim::{Playback, ProcessId, ProcessState, RoundRobinScheduler};

fn ids(list: &[&str]) -> Vec<ProcessId> {
    list.iter().map(|&id| ProcessId::from(id)).collect()
}

fn textbook_run() -> RoundRobinScheduler {
    let mut scheduler = RoundRobinScheduler::new();
    scheduler.add("P1", 0, 8).unwrap();
    scheduler.add("P2", 1, 4).unwrap();
    scheduler.add("P3", 2, 9).unwrap();
    scheduler.add("P4", 3, 5).unwrap();
    scheduler.run(3).unwrap();
    scheduler
}

#[test]
fn test_two_snapshots_per_dispatch() {
    let scheduler = textbook_run();
    assert_eq!(
        scheduler.history().len(),
        2 * scheduler.gantt_chart().len()
    );
}

#[test]
fn test_snapshot_contents() {
    let scheduler = textbook_run();
    let history = scheduler.history();

    // Second dispatch of P1 at t=3: all others have just arrived
    let snapshot = &history[2];
    assert_eq!(snapshot.time, 3);
    assert_eq!(snapshot.current_process_id, Some(ProcessId::from("P1")));
    assert_eq!(snapshot.ready_queue_ids, ids(&["P2", "P3", "P4"]));
    assert!(snapshot.completed_process_ids.is_empty());

    let p1 = snapshot.process("P1").unwrap();
    assert_eq!(p1.state, ProcessState::Running);
    assert_eq!(p1.remaining_time, 5);
    assert_eq!(snapshot.process("P2").unwrap().state, ProcessState::Ready);

    // After P1 terminates at t=17
    let snapshot = &history[11];
    assert_eq!(snapshot.time, 17);
    assert!(snapshot.is_idle());
    assert_eq!(snapshot.completed_process_ids, ids(&["P1"]));
    assert_eq!(
        snapshot.process("P1").unwrap().state,
        ProcessState::Terminated
    );
    assert_eq!(snapshot.process("P1").unwrap().turnaround_time, 17);
    assert_eq!(snapshot.process("P2").unwrap().state, ProcessState::Waiting);
}

#[test]
fn test_history_times_non_decreasing_and_end_at_makespan() {
    let scheduler = textbook_run();
    let history = scheduler.history();

    assert!(history.windows(2).all(|w| w[0].time <= w[1].time));
    assert_eq!(history.last().unwrap().time, scheduler.current_time());
}

#[test]
fn test_every_snapshot_lists_every_process() {
    let scheduler = textbook_run();
    for snapshot in scheduler.history() {
        let listed: Vec<&str> = snapshot.processes.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(listed, vec!["P1", "P2", "P3", "P4"]);
    }
}

#[test]
fn test_playback_walks_whole_run() {
    let scheduler = textbook_run();
    let mut playback = Playback::new(scheduler.history());

    assert!(playback.play());
    let mut frames = 1;
    while playback.tick().is_some() {
        frames += 1;
    }

    assert_eq!(frames, scheduler.history().len());
    assert!(!playback.is_playing());
    assert_eq!(playback.current().unwrap().time, 26);
}

#[test]
fn test_playback_seek_to_time_shows_last_snapshot() {
    let scheduler = textbook_run();
    let mut playback = Playback::new(scheduler.history());

    // Two snapshots at t=3: post-dispatch (idle) then P1's second dispatch
    let frame = playback.seek_to_time(3).unwrap();
    assert_eq!(frame.current_process_id, Some(ProcessId::from("P1")));
    assert_eq!(playback.position(), 2);

    let frame = playback.seek_to_time(16).unwrap();
    assert_eq!(frame.time, 15);
    assert_eq!(frame.current_process_id, Some(ProcessId::from("P1")));

    playback.step_backward();
    assert_eq!(playback.current().unwrap().time, 15);
    assert!(playback.current().unwrap().is_idle());
}
