//! Example: render assertions
//!
//! This example mounts a counter component that rerenders whenever it is
//! told to, and checks its renders with `to_rerender` and
//! `to_render_exactly_times`.

use std::time::Duration;

use render_stream_assert::prelude::*;
use tokio::sync::mpsc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    println!("🖼️  render-stream-assert - Render Assertions\n");

    example_rerender().await?;
    example_render_count().await?;
    example_failure_report().await;

    println!("\n✅ All render assertion examples completed!");
    Ok(())
}

/// Mount a counter that renders once per increment request.
fn mount_counter(stream: &RenderStream<u32>) -> mpsc::UnboundedSender<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<()>();
    stream.render(move |renderer: Renderer<u32>| {
        renderer.render(0);
        tokio::spawn(async move {
            let mut count = 0;
            while rx.recv().await.is_some() {
                count += 1;
                renderer.render(count);
            }
        });
    });
    tx
}

/// Did the component render again?
async fn example_rerender() -> Result<()> {
    println!("📌 Example 1: to_rerender");

    let stream = RenderStream::new();
    let increment = mount_counter(&stream);

    expect(|| stream.take_render()).to_rerender().await?;
    println!("   Mount render observed");

    let _ = increment.send(());
    expect(|| stream.take_render()).to_rerender().await?;
    println!("   Rerender observed after increment");

    expect(|| stream.take_render()).not().to_rerender().await?;
    println!("   No further renders");
    Ok(())
}

/// How many times did it render?
async fn example_render_count() -> Result<()> {
    println!("\n📌 Example 2: to_render_exactly_times");

    let stream = RenderStream::new();
    let increment = mount_counter(&stream);
    for _ in 0..3 {
        let _ = increment.send(());
    }

    expect(|| stream.take_render())
        .to_render_exactly_times_with(4, MatcherOptions::new().timeout(Duration::from_millis(50)))
        .await?;
    println!("   Rendered exactly 4 times (mount + 3 increments)");

    for render in stream.renders() {
        println!(
            "   #{} {} -> {} after {:?}",
            render.index, render.phase, render.snapshot, render.elapsed
        );
    }
    Ok(())
}

/// What a failing assertion reports.
async fn example_failure_report() {
    println!("\n📌 Example 3: failure report");

    let stream = RenderStream::new();
    let _increment = mount_counter(&stream);

    if let Err(err) = expect(|| stream.take_render())
        .to_render_exactly_times(3)
        .await
    {
        for line in err.to_string().lines() {
            println!("   {line}");
        }
    }
}
