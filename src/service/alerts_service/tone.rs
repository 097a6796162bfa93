use crate::dto::SoundType;
use std::time::Duration;

pub(super) const SAMPLE_RATE: u32 = 44_100;

const AMPLITUDE: f32 = 0.8;

/// Attack stays short to avoid audible clicks
const ATTACK: Duration = Duration::from_millis(10);

pub(super) enum Waveform {
    Sine,
    Square,
    Triangle,
}

pub(super) struct ToneSpec {
    pub start_frequency: f32,
    pub end_frequency: f32,
    pub waveform: Waveform,
}

pub(super) fn spec_for(sound: SoundType) -> ToneSpec {
    match sound {
        SoundType::Beep => ToneSpec {
            start_frequency: 880.0,
            end_frequency: 880.0,
            waveform: Waveform::Square,
        },
        // upward ramp, C5 to G5
        SoundType::Chime => ToneSpec {
            start_frequency: 523.25,
            end_frequency: 783.99,
            waveform: Waveform::Sine,
        },
        SoundType::Bell => ToneSpec {
            start_frequency: 1318.51,
            end_frequency: 659.25,
            waveform: Waveform::Triangle,
        },
        SoundType::Ding => ToneSpec {
            start_frequency: 1046.5,
            end_frequency: 1046.5,
            waveform: Waveform::Sine,
        },
        SoundType::Pop => ToneSpec {
            start_frequency: 400.0,
            end_frequency: 150.0,
            waveform: Waveform::Sine,
        },
    }
}

///
/// Render the tone with a linear attack and exponential decay
/// envelope. Frequency ramps linearly from start to end.
///
pub(super) fn render(spec: &ToneSpec, duration: Duration) -> Vec<f32> {
    let total = duration.as_secs_f32();
    let count = (total * SAMPLE_RATE as f32) as usize;
    let attack = ATTACK.as_secs_f32().min(total / 4.0);

    let mut samples = Vec::with_capacity(count);
    let mut phase = 0.0f32;

    for i in 0..count {
        let t = i as f32 / SAMPLE_RATE as f32;
        let progress = t / total;

        let frequency =
            spec.start_frequency + (spec.end_frequency - spec.start_frequency) * progress;
        phase = (phase + frequency / SAMPLE_RATE as f32).fract();

        let raw = match spec.waveform {
            Waveform::Sine => (phase * std::f32::consts::TAU).sin(),
            Waveform::Square => {
                if phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Triangle => 4.0 * (phase - 0.5).abs() - 1.0,
        };

        let envelope = if t < attack {
            t / attack
        } else {
            (-5.0 * (t - attack) / (total - attack).max(f32::EPSILON)).exp()
        };

        samples.push(raw * envelope * AMPLITUDE);
    }

    samples
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn render_produces_expected_sample_count() {
        let spec = spec_for(SoundType::Beep);

        let samples = render(&spec, Duration::from_millis(300));

        assert_eq!(samples.len(), (0.3 * SAMPLE_RATE as f32) as usize);
    }

    #[test]
    fn render_starts_silent() {
        let spec = spec_for(SoundType::Chime);

        let samples = render(&spec, Duration::from_millis(300));

        assert!(samples[0].abs() < 0.01);
    }

    #[test]
    fn render_decays_to_near_silence() {
        let spec = spec_for(SoundType::Ding);

        let samples = render(&spec, Duration::from_millis(300));

        let peak = samples.iter().fold(0.0f32, |max, s| max.max(s.abs()));
        let tail = samples[samples.len() - 1].abs();
        assert!(peak > 0.5);
        assert!(tail < peak * 0.1);
    }

    #[test]
    fn render_stays_within_unit_range() {
        for sound in [
            SoundType::Beep,
            SoundType::Chime,
            SoundType::Bell,
            SoundType::Ding,
            SoundType::Pop,
        ] {
            let samples = render(&spec_for(sound), Duration::from_millis(100));

            assert!(samples.iter().all(|s| s.abs() <= 1.0));
        }
    }

    #[test]
    fn chime_ramps_frequency_upward() {
        let spec = spec_for(SoundType::Chime);

        assert!(spec.end_frequency > spec.start_frequency);
    }
}
