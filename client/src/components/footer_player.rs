//! Fixed footer audio player.
//!
//! The player state is the source of truth; an effect pushes it into the
//! `<audio>` element (src, play/pause, volume) and the element's events
//! report progress and duration back. Playback errors reset the player.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

use crate::state::player::{PlayerState, format_time};

#[cfg(feature = "hydrate")]
fn audio_of(ev: &leptos::ev::Event) -> Option<web_sys::HtmlAudioElement> {
    ev.target()?.dyn_into::<web_sys::HtmlAudioElement>().ok()
}

/// Footer player: play/pause, track name, seekable progress, volume.
/// Hidden while nothing is loaded.
#[component]
pub fn FooterPlayer() -> impl IntoView {
    let player = expect_context::<RwSignal<PlayerState>>();
    let audio_ref = NodeRef::<leptos::html::Audio>::new();

    // Push state into the element. The src write is keyed on the URL so
    // pause/resume does not restart the track.
    #[cfg(feature = "hydrate")]
    {
        let loaded_url = RwSignal::new(None::<String>);
        Effect::new(move || {
            let state = player.get();
            let Some(audio) = audio_ref.get() else {
                return;
            };
            match state.track {
                Some(track) => {
                    if loaded_url.get_untracked().as_deref() != Some(track.url.as_str()) {
                        audio.set_src(&track.url);
                        loaded_url.set(Some(track.url.clone()));
                    }
                    if let Some(volume) = state.volume {
                        audio.set_volume(volume);
                    }
                    if state.playing {
                        let _ = audio.play();
                    } else {
                        let _ = audio.pause();
                    }
                }
                None => {
                    let _ = audio.pause();
                    loaded_url.set(None);
                }
            }
        });
    }

    let on_time_update = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::Event| {
                let Some(audio) = audio_of(&ev) else {
                    return;
                };
                player.update(|p| p.progress_s = audio.current_time());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::Event| {}
        }
    };

    let on_loaded_metadata = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::Event| {
                let Some(audio) = audio_of(&ev) else {
                    return;
                };
                let duration = audio.duration();
                player.update(|p| p.duration_s = duration.is_finite().then_some(duration));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::Event| {}
        }
    };

    let on_ended = move |_ev: leptos::ev::Event| {
        player.update(PlayerState::stop);
    };

    let on_error = {
        #[cfg(feature = "hydrate")]
        {
            move |_ev: leptos::ev::ErrorEvent| {
                log::error!("audio playback failed; resetting the player");
                player.update(PlayerState::stop);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::ErrorEvent| {}
        }
    };

    let on_toggle = move |_ev: leptos::ev::MouseEvent| {
        player.update(|p| {
            if p.track.is_some() {
                p.playing = !p.playing;
            }
        });
    };

    let on_seek = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::Event| {
                let Some(input) = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                else {
                    return;
                };
                let Ok(permille) = input.value().parse::<f64>() else {
                    return;
                };
                let target = player.with_untracked(|p| p.seek_target(permille / 1000.0));
                if let (Some(target), Some(audio)) = (target, audio_ref.get()) {
                    audio.set_current_time(target);
                    player.update(|p| p.progress_s = target);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::Event| {}
        }
    };

    let on_mute = move |_ev: leptos::ev::MouseEvent| {
        player.update(PlayerState::toggle_mute);
    };

    let on_volume = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::Event| {
                let Some(input) = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                else {
                    return;
                };
                if let Ok(volume) = input.value().parse::<f64>() {
                    player.update(|p| p.volume = Some((volume / 100.0).clamp(0.0, 1.0)));
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::Event| {}
        }
    };

    let track_name = move || player.with(|p| p.track.as_ref().map(|t| t.name.clone()));
    let toggle_label = move || if player.with(|p| p.playing) { "\u{23f8}" } else { "\u{25b6}" };
    let progress_permille = move || format!("{:.0}", player.with(PlayerState::fraction) * 1000.0);
    let time_readout = move || {
        player.with(|p| {
            format!(
                "{} / {}",
                format_time(p.progress_s),
                format_time(p.duration_s.unwrap_or(f64::NAN))
            )
        })
    };
    let volume_percent = move || {
        format!("{:.0}", player.with(|p| p.volume.unwrap_or(1.0)) * 100.0)
    };
    let mute_label = move || if player.with(PlayerState::is_muted) { "\u{1f507}" } else { "\u{1f50a}" };

    view! {
        <audio
            node_ref=audio_ref
            on:timeupdate=on_time_update
            on:loadedmetadata=on_loaded_metadata
            on:ended=on_ended
            on:error=on_error
        ></audio>
        {move || {
            track_name()
                .map(|name| {
                    view! {
                        <footer class="footer-player">
                            <button class="footer-player__toggle" on:click=on_toggle>
                                {toggle_label}
                            </button>
                            <span class="footer-player__name">{name}</span>
                            <input
                                class="footer-player__seek"
                                type="range"
                                min="0"
                                max="1000"
                                prop:value=progress_permille
                                on:input=on_seek
                            />
                            <span class="footer-player__time">{time_readout}</span>
                            <button class="footer-player__mute" on:click=on_mute>
                                {mute_label}
                            </button>
                            <input
                                class="footer-player__volume"
                                type="range"
                                min="0"
                                max="100"
                                prop:value=volume_percent
                                on:input=on_volume
                            />
                        </footer>
                    }
                })
        }}
    }
}
