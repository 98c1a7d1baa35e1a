#![allow(clippy::unwrap_used)]

use crate::{AnimationRange, KeyframeAnimation, MIN_FRAME_INTERVAL, tests::support::frame_recorder};

use std::time::Duration;

const SPEED: Duration = Duration::from_millis(100);

/// WHAT: Holding a frame renders it once without a timer
/// WHY: init() must show the initial icon without animating into it
#[tokio::test(start_paused = true)]
async fn given_idle_player_when_playing_same_start_and_end_then_renders_once() {
    // Given: An idle player
    let (frames, on_frame) = frame_recorder();
    let mut animation = KeyframeAnimation::new(SPEED, on_frame);

    // When: Playing {start: 3, end: 3}
    animation.play(AnimationRange::hold(3));

    // Then: Frame 3 shown once, timer never started
    assert_eq!(animation.current_frame(), 3);
    assert!(!animation.is_running());
    tokio::time::sleep(SPEED * 5).await;
    assert_eq!(*frames.lock().unwrap(), vec![3]);
}

/// WHAT: Playing forward steps one frame per interval then halts
/// WHY: The icon must move through every intermediate frame
#[tokio::test(start_paused = true)]
async fn given_frame_two_when_playing_to_five_then_renders_three_four_five() {
    // Given: A player resting on frame 2
    let (frames, on_frame) = frame_recorder();
    let mut animation = KeyframeAnimation::new(SPEED, on_frame);
    animation.play(AnimationRange::hold(2));

    // When: Playing toward frame 5
    animation.play(AnimationRange::to(5));
    assert!(animation.is_running());
    tokio::time::sleep(SPEED * 10).await;

    // Then: 3, 4, 5 rendered in order and the player stopped by itself
    assert_eq!(*frames.lock().unwrap(), vec![2, 3, 4, 5]);
    assert_eq!(animation.current_frame(), 5);
    assert!(!animation.is_running());
}

/// WHAT: Frames advance at the configured speed
/// WHY: Each frame must stay on screen for one interval
#[tokio::test(start_paused = true)]
async fn given_running_player_when_partial_time_elapses_then_one_frame_per_interval() {
    // Given: A player heading from 0 to 9
    let (frames, on_frame) = frame_recorder();
    let mut animation = KeyframeAnimation::new(SPEED, on_frame);

    // When: Three and a half intervals pass
    animation.play(AnimationRange::to(9));
    tokio::time::sleep(SPEED * 3 + SPEED / 2).await;

    // Then: Exactly three frames advanced and the player is still running
    assert_eq!(*frames.lock().unwrap(), vec![1, 2, 3]);
    assert!(animation.is_running());
}

/// WHAT: Retargeting a running animation continues from the current frame
/// WHY: A state change mid-animation must not jump back to the old start
#[tokio::test(start_paused = true)]
async fn given_animation_toward_five_at_three_when_retargeting_to_seven_then_continues() {
    // Given: A player that started at 2, heading to 5, now on frame 3
    let (frames, on_frame) = frame_recorder();
    let mut animation = KeyframeAnimation::new(SPEED, on_frame);
    animation.play(AnimationRange::hold(2));
    animation.play(AnimationRange::to(5));
    tokio::time::sleep(SPEED + SPEED / 2).await;
    assert_eq!(animation.current_frame(), 3);

    // When: Retargeting to 7
    animation.play(AnimationRange::to(7));
    tokio::time::sleep(SPEED * 10).await;

    // Then: 4, 5, 6, 7 follow frame 3
    assert_eq!(*frames.lock().unwrap(), vec![2, 3, 4, 5, 6, 7]);
    assert!(!animation.is_running());
}

/// WHAT: Retargeting behind the cursor reverses direction
/// WHY: Going from securing back to unsecured plays the lock backwards
#[tokio::test(start_paused = true)]
async fn given_forward_animation_when_retargeting_backward_then_steps_down() {
    // Given: A player heading from 0 to 9, now on frame 3
    let (frames, on_frame) = frame_recorder();
    let mut animation = KeyframeAnimation::new(SPEED, on_frame);
    animation.play(AnimationRange::to(9));
    tokio::time::sleep(SPEED * 3 + SPEED / 2).await;

    // When: Retargeting to 0
    animation.play(AnimationRange::to(0));
    tokio::time::sleep(SPEED * 10).await;

    // Then: The player walks back down to 0
    assert_eq!(*frames.lock().unwrap(), vec![1, 2, 3, 2, 1, 0]);
    assert_eq!(animation.current_frame(), 0);
}

/// WHAT: Retargeting to the frame on screen halts without another render
/// WHY: The destination is already visible
#[tokio::test(start_paused = true)]
async fn given_running_player_when_retargeting_to_current_frame_then_halts() {
    // Given: A player heading to 9, now on frame 2
    let (frames, on_frame) = frame_recorder();
    let mut animation = KeyframeAnimation::new(SPEED, on_frame);
    animation.play(AnimationRange::to(9));
    tokio::time::sleep(SPEED * 2 + SPEED / 2).await;

    // When: Retargeting to frame 2
    animation.play(AnimationRange::to(2));
    tokio::time::sleep(SPEED * 5).await;

    // Then: No extra frames and the player is idle
    assert_eq!(*frames.lock().unwrap(), vec![1, 2]);
    assert!(!animation.is_running());
}

/// WHAT: An idle player asked for the frame it shows renders it again
/// WHY: Reloading images re-asserts the current frame with the new artwork
#[tokio::test(start_paused = true)]
async fn given_idle_player_on_target_when_playing_to_same_frame_then_renders_again() {
    // Given: A player resting on frame 8
    let (frames, on_frame) = frame_recorder();
    let mut animation = KeyframeAnimation::new(SPEED, on_frame);
    animation.play(AnimationRange::hold(8));

    // When: Playing to 8 again
    animation.play(AnimationRange::to(8));

    // Then: Frame 8 rendered a second time, no timer
    assert_eq!(*frames.lock().unwrap(), vec![8, 8]);
    assert!(!animation.is_running());
}

/// WHAT: stop() halts the timer and leaves the last frame in place
/// WHY: No callback may fire once the player is stopped
#[tokio::test(start_paused = true)]
async fn given_running_player_when_stopped_then_no_further_frames() {
    // Given: A player heading to 9, now on frame 2
    let (frames, on_frame) = frame_recorder();
    let mut animation = KeyframeAnimation::new(SPEED, on_frame);
    animation.play(AnimationRange::to(9));
    tokio::time::sleep(SPEED * 2 + SPEED / 2).await;

    // When: Stopping and waiting well past the remaining frames
    animation.stop();
    tokio::time::sleep(SPEED * 20).await;

    // Then: Nothing after frame 2, cursor unchanged
    assert_eq!(*frames.lock().unwrap(), vec![1, 2]);
    assert_eq!(animation.current_frame(), 2);
    assert!(!animation.is_running());
}

/// WHAT: A stopped player resumes from its last frame
/// WHY: stop() leaves the cursor where it was for the next play()
#[tokio::test(start_paused = true)]
async fn given_stopped_player_when_playing_again_then_resumes_from_last_frame() {
    // Given: A player stopped on frame 2
    let (frames, on_frame) = frame_recorder();
    let mut animation = KeyframeAnimation::new(SPEED, on_frame);
    animation.play(AnimationRange::to(9));
    tokio::time::sleep(SPEED * 2 + SPEED / 2).await;
    animation.stop();

    // When: Playing toward 4
    animation.play(AnimationRange::to(4));
    tokio::time::sleep(SPEED * 10).await;

    // Then: Continues 3, 4 from frame 2
    assert_eq!(*frames.lock().unwrap(), vec![1, 2, 3, 4]);
}

/// WHAT: Dropping a running player stops its timer
/// WHY: Releasing the player must not leave a dangling timer behind
#[tokio::test(start_paused = true)]
async fn given_running_player_when_dropped_then_no_further_frames() {
    // Given: A player heading to 9, now on frame 1
    let (frames, on_frame) = frame_recorder();
    let mut animation = KeyframeAnimation::new(SPEED, on_frame);
    animation.play(AnimationRange::to(9));
    tokio::time::sleep(SPEED + SPEED / 2).await;

    // When: Dropping the player
    drop(animation);
    tokio::time::sleep(SPEED * 20).await;

    // Then: Only frame 1 was ever shown
    assert_eq!(*frames.lock().unwrap(), vec![1]);
}

/// WHAT: A zero speed is raised to the minimum interval
/// WHY: A zero-period timer cannot tick, which would leave the player stuck running
#[tokio::test(start_paused = true)]
async fn given_zero_speed_when_playing_then_frames_still_advance_and_halt() {
    // Given: A player created with a zero interval
    let (frames, on_frame) = frame_recorder();
    let mut animation = KeyframeAnimation::new(Duration::ZERO, on_frame);
    assert_eq!(animation.speed(), MIN_FRAME_INTERVAL);

    // When: Playing to 3, then on to 5 once it has come to rest
    animation.play(AnimationRange::to(3));
    tokio::time::sleep(SPEED).await;
    animation.play(AnimationRange::to(5));
    tokio::time::sleep(SPEED).await;

    // Then: Every frame rendered and the player is idle on 5
    assert_eq!(*frames.lock().unwrap(), vec![1, 2, 3, 4, 5]);
    assert_eq!(animation.current_frame(), 5);
    assert!(!animation.is_running());
}

/// WHAT: A start frame sent to a running player only moves the destination
/// WHY: The icon must not jump while it is animating
#[tokio::test(start_paused = true)]
async fn given_running_player_when_playing_with_start_then_continues_from_current_frame() {
    // Given: A player heading to 9, now on frame 2
    let (frames, on_frame) = frame_recorder();
    let mut animation = KeyframeAnimation::new(SPEED, on_frame);
    animation.play(AnimationRange::to(9));
    tokio::time::sleep(SPEED * 2 + SPEED / 2).await;

    // When: Playing {start: 6, end: 4}
    animation.play(AnimationRange {
        start: Some(6),
        end: 4,
    });
    tokio::time::sleep(SPEED * 10).await;

    // Then: No jump to 6, the player walks 3, 4 and halts
    assert_eq!(*frames.lock().unwrap(), vec![1, 2, 3, 4]);
    assert_eq!(animation.current_frame(), 4);
    assert!(!animation.is_running());
}
