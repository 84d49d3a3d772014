//! Built-in tutorial content.
//!
//! Ten primary modules plus one staged bonus module, spliced into the
//! traversal order after module 10. Content is author-time data; the
//! catalog validates all of it once at load so screens can trust every
//! cross-reference.

use dashtour_core::model::{
    Completion, Hotspot, HotspotId, Module, ModuleError, ModuleFlow, ModuleId, Objective, Quiz,
    RouteTarget, Stage,
};

use crate::error::CatalogError;

//
// ─── OVERVIEW SCRIPT ───────────────────────────────────────────────────────────
//

/// One narrated instruction on the overview screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewStep {
    pub text: String,
    pub narration: String,
}

/// The pre-tutorial walkthrough shown on `/overview`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewScript {
    steps: Vec<OverviewStep>,
    start_label: String,
    start_narration: String,
    start_target: RouteTarget,
}

impl OverviewScript {
    #[must_use]
    pub fn steps(&self) -> &[OverviewStep] {
        &self.steps
    }

    #[must_use]
    pub fn step(&self, index: usize) -> Option<&OverviewStep> {
        self.steps.get(index)
    }

    #[must_use]
    pub fn start_label(&self) -> &str {
        &self.start_label
    }

    #[must_use]
    pub fn start_narration(&self) -> &str {
        &self.start_narration
    }

    #[must_use]
    pub fn start_target(&self) -> RouteTarget {
        self.start_target
    }
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// All modules in id order, plus the overview script.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleCatalog {
    modules: Vec<Module>,
    overview: OverviewScript,
}

impl ModuleCatalog {
    /// Build and validate the built-in content.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` for invalid content or a broken traversal
    /// chain. With the shipped data this cannot fail, but the catalog is
    /// validated like any other input.
    pub fn builtin() -> Result<Self, CatalogError> {
        let modules = vec![
            dashboard_overview()?,
            instrument_cluster()?,
            infotainment_basics()?,
            climate_controls()?,
            drive_modes()?,
            phone_connectivity()?,
            voice_commands()?,
            parking_assist()?,
            ambient_lighting()?,
            driver_profile()?,
            mascot_bonus()?,
        ];
        let overview = overview_script();
        Self::new(modules, overview)
    }

    /// Build a catalog from explicit content.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateModuleId` for repeated ids,
    /// `CatalogError::BrokenLink` when a completion points at a missing
    /// module, and `CatalogError::UnterminatedChain` when following the
    /// links from the first module never reaches the completion screen.
    pub fn new(modules: Vec<Module>, overview: OverviewScript) -> Result<Self, CatalogError> {
        let mut seen = std::collections::HashSet::new();
        for module in &modules {
            if !seen.insert(module.id()) {
                return Err(CatalogError::DuplicateModuleId(module.id()));
            }
        }

        let catalog = Self { modules, overview };
        catalog.validate_chain()?;
        Ok(catalog)
    }

    fn validate_chain(&self) -> Result<(), CatalogError> {
        let Some(first) = self.modules.first() else {
            return Ok(());
        };

        let mut visited = std::collections::HashSet::new();
        let mut current = first;
        loop {
            if !visited.insert(current.id()) {
                return Err(CatalogError::UnterminatedChain);
            }
            match current.completion().next() {
                RouteTarget::Complete => return Ok(()),
                RouteTarget::Module(next_id) => {
                    current = self.get(next_id).ok_or(CatalogError::BrokenLink {
                        from: current.id(),
                        to: RouteTarget::Module(next_id),
                    })?;
                }
                other => {
                    return Err(CatalogError::BrokenLink {
                        from: current.id(),
                        to: other,
                    });
                }
            }
        }
    }

    #[must_use]
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    #[must_use]
    pub fn get(&self, id: ModuleId) -> Option<&Module> {
        self.modules.iter().find(|module| module.id() == id)
    }

    #[must_use]
    pub fn overview(&self) -> &OverviewScript {
        &self.overview
    }

    /// Every module, bonus included; the denominator of the persisted
    /// snapshot.
    #[must_use]
    pub fn total_modules(&self) -> u32 {
        u32::try_from(self.modules.len()).unwrap_or(u32::MAX)
    }

    /// Modules counted in the progress header (bonus excluded).
    #[must_use]
    pub fn primary_modules(&self) -> u32 {
        u32::try_from(
            self.modules
                .iter()
                .filter(|module| !module.is_bonus())
                .count(),
        )
        .unwrap_or(u32::MAX)
    }
}

//
// ─── CONTENT ───────────────────────────────────────────────────────────────────
//

fn spot(id: &str, x: u8, y: u8, label: &str) -> Result<Hotspot, CatalogError> {
    Ok(Hotspot::new(HotspotId::new(id)?, x, y, label)?)
}

fn step(
    target: &str,
    hotspot: &str,
    instruction: &str,
    narration: &str,
) -> Result<Objective, CatalogError> {
    Ok(Objective::new(
        target,
        instruction,
        narration,
        HotspotId::new(hotspot)?,
    )?)
}

fn stage(hotspot: &str) -> Result<Stage, CatalogError> {
    Ok(Stage::new(HotspotId::new(hotspot)?))
}

fn next_module(id: u32, narration: &str) -> Completion {
    Completion::new(RouteTarget::Module(ModuleId::new(id)), narration, true)
}

#[allow(clippy::too_many_arguments)]
fn standard_module(
    id: u32,
    slug: &str,
    title: &str,
    objectives: Vec<Objective>,
    quiz: Quiz,
    completion: Completion,
    layout: Vec<Hotspot>,
) -> Result<Module, ModuleError> {
    Module::new(
        ModuleId::new(id),
        slug,
        title,
        objectives,
        Some(quiz),
        completion,
        layout,
        ModuleFlow::Standard,
    )
}

fn dashboard_overview() -> Result<Module, CatalogError> {
    let objectives = vec![
        step(
            "Driver Instrument Cluster",
            "instrument_cluster",
            "Locate the digital display behind the steering wheel and center it in your camera view.",
            "That big screen in front of you is the instrument cluster. It knows how fast you are going, even when you pretend not to.",
        )?,
        step(
            "Center Infotainment Screen",
            "infotainment_screen",
            "Find the wide touchscreen in the center of the dashboard.",
            "There it is, mission control. Maps, music, and a hundred menus you will open exactly once.",
        )?,
        step(
            "Climate Control Panel",
            "climate_panel",
            "Spot the row of buttons and knobs below the center screen.",
            "Those little buttons settle every cabin temperature argument. Use them wisely.",
        )?,
        step(
            "Steering Wheel Controls",
            "steering_controls",
            "Look at the buttons on both sides of the steering wheel.",
            "Fighter-pilot buttons. Mostly for the radio, but let yourself dream.",
        )?,
    ];
    let quiz = Quiz::new(
        "Which part of the dashboard shows your current speed?",
        vec![
            "Center Infotainment Screen".into(),
            "Climate Control Panel".into(),
            "Driver Instrument Cluster".into(),
            "Steering Wheel".into(),
        ],
        2,
        "Correct! The cluster never lies about your speed.",
        "Not that one. Look behind the steering wheel and try again.",
    )?;
    let module = standard_module(
        1,
        "dashboard_overview",
        "Dashboard Overview",
        objectives,
        quiz,
        next_module(2, "Solid start! You can tell a screen from a knob. Onward!"),
        vec![
            spot("instrument_cluster", 30, 40, "Driver Instrument Cluster")?,
            spot("infotainment_screen", 50, 35, "Center Infotainment Screen")?,
            spot("climate_panel", 50, 60, "Climate Control Panel")?,
            spot("steering_controls", 25, 50, "Steering Wheel Controls")?,
        ],
    )?;
    Ok(module)
}

fn instrument_cluster() -> Result<Module, CatalogError> {
    let objectives = vec![
        step(
            "Speedometer Area",
            "speedometer",
            "Focus on the left gauge showing your current speed.",
            "Your speed, in large friendly numbers. Forty is not the new twenty-five.",
        )?,
        step(
            "Tachometer Area",
            "tachometer",
            "Locate the right-side gauge showing engine revolutions.",
            "The tachometer shows how hard the engine works, not how stressed you are while parking.",
        )?,
        step(
            "Fuel & Range Display",
            "fuel_display",
            "Spot the fuel gauge and remaining range readout.",
            "The fuel gauge. A short horror story, starring your wallet.",
        )?,
        step(
            "Driving Assistance Indicators",
            "assistance_icons",
            "Find the icons for lane keeping, blind spot alerts, and cruise control readiness.",
            "These little icons quietly save the day while you take the credit.",
        )?,
    ];
    let quiz = Quiz::new(
        "Which indicator tells you how fast your engine is spinning?",
        vec![
            "Fuel Gauge".into(),
            "Speedometer".into(),
            "Tachometer".into(),
            "Blind Spot Monitor".into(),
        ],
        2,
        "Nailed it, the tachometer it is.",
        "Not even close, but points for enthusiasm. Try again.",
    )?;
    let module = standard_module(
        2,
        "instrument_cluster",
        "Understanding the Instrument Cluster",
        objectives,
        quiz,
        next_module(3, "Nice work! The gauges hold no secrets for you now. Let's roll!"),
        vec![
            spot("speedometer", 25, 40, "Speedometer")?,
            spot("tachometer", 35, 40, "Tachometer")?,
            spot("fuel_display", 30, 50, "Fuel & Range Display")?,
            spot("assistance_icons", 30, 30, "Driving Assistance Indicators")?,
        ],
    )?;
    Ok(module)
}

fn infotainment_basics() -> Result<Module, CatalogError> {
    let objectives = vec![
        step(
            "Navigation App",
            "navigation_app",
            "Find the navigation map on the center screen.",
            "Turn-by-turn directions without having to ask a stranger at a gas station.",
        )?,
        step(
            "Media Player",
            "media_player",
            "Focus on the music and media control area.",
            "The media player. Your passengers will have opinions about it.",
        )?,
        step(
            "Phone Connectivity Status",
            "phone_connectivity",
            "Locate the icon showing Bluetooth or phone projection status.",
            "When your phone shows up here, the pairing gods have smiled on you.",
        )?,
        step(
            "Settings Menu",
            "settings_menu",
            "Spot the main settings menu icon on the screen.",
            "Settings. Infinite options, most of which you will never touch again after today.",
        )?,
    ];
    let quiz = Quiz::new(
        "Where would you go to change the display brightness?",
        vec![
            "Navigation App".into(),
            "Settings Menu".into(),
            "Media Player".into(),
            "Phone Connectivity".into(),
        ],
        1,
        "Correct! Settings is the land of sliders.",
        "Nope. The map will not dim itself. Try again.",
    )?;
    let module = standard_module(
        3,
        "infotainment_system",
        "Center Infotainment System Basics",
        objectives,
        quiz,
        next_module(4, "Look at you, touchscreen wizard. Keep going!"),
        vec![
            spot("navigation_app", 50, 30, "Navigation App")?,
            spot("media_player", 50, 40, "Media Player")?,
            spot("phone_connectivity", 50, 50, "Phone Connectivity")?,
            spot("settings_menu", 50, 60, "Settings Menu")?,
        ],
    )?;
    Ok(module)
}

fn climate_controls() -> Result<Module, CatalogError> {
    let objectives = vec![
        step(
            "Temperature Adjustment Knobs",
            "temp_knobs",
            "Focus on the knobs that set driver and passenger temperatures.",
            "Two knobs, two climate zones, zero arguments. In theory.",
        )?,
        step(
            "Fan Speed Control",
            "fan_speed",
            "Locate the control that adjusts the fan speed.",
            "More fan, more breeze. Science at its finest.",
        )?,
        step(
            "Seat Heating Buttons",
            "seat_heaters",
            "Spot the seat heating buttons for both front seats.",
            "Seat heaters, proof that civilization peaked right here.",
        )?,
        step(
            "Seat Ventilation Buttons",
            "seat_coolers",
            "Identify the seat cooling button, if equipped.",
            "Cooled seats. You are officially living in the future.",
        )?,
    ];
    let quiz = Quiz::new(
        "Which control makes the cabin warmer or cooler?",
        vec![
            "Fan Speed Control".into(),
            "Temperature Adjustment Knobs".into(),
            "Seat Heating Buttons".into(),
            "Navigation Screen".into(),
        ],
        1,
        "Correct, the temperature knobs run the show.",
        "Wrong knob, Captain Breeze. Try again.",
    )?;
    let module = standard_module(
        4,
        "climate_controls",
        "Climate Control and Comfort Settings",
        objectives,
        quiz,
        next_module(5, "Climate mastered. Next up, drive modes!"),
        vec![
            spot("temp_knobs", 50, 65, "Temperature Adjustment Knobs")?,
            spot("fan_speed", 55, 65, "Fan Speed Control")?,
            spot("seat_heaters", 45, 70, "Seat Heating Buttons")?,
            spot("seat_coolers", 60, 70, "Seat Ventilation")?,
        ],
    )?;
    Ok(module)
}

fn drive_modes() -> Result<Module, CatalogError> {
    let objectives = vec![
        step(
            "Drive Mode Selector",
            "mode_selector",
            "Locate the drive mode selector near the gear shift.",
            "One button turns a Sunday cruiser into something much less sensible.",
        )?,
        step(
            "Drive Mode Display",
            "cluster_drive_mode_display",
            "Focus on the cluster area where the selected mode is shown.",
            "Glance up. The cluster announces every mode change like it is opening night.",
        )?,
        step(
            "Comfort Mode",
            "comfort_mode",
            "Switch into Comfort Mode and confirm the label on the display.",
            "Comfort Mode: floats like a cloud, stings like a cushion.",
        )?,
        step(
            "Sport Mode",
            "sport_mode",
            "Switch into Sport Mode and confirm it on the screen.",
            "Sport Mode. May cause sudden grins and firmer shifts.",
        )?,
    ];
    let quiz = Quiz::new(
        "Which mode gives you the smoothest, softest ride?",
        vec![
            "Sport Mode".into(),
            "Eco Mode".into(),
            "Adaptive Mode".into(),
            "Comfort Mode".into(),
        ],
        3,
        "Smooth operator. Comfort Mode for the win.",
        "You picked the stiff one, didn't you? Try again.",
    )?;
    let module = standard_module(
        5,
        "drive_modes",
        "Exploring Drive Modes",
        objectives,
        quiz,
        next_module(6, "Drive modes survived! Next, connecting your phone without calling tech support."),
        vec![
            spot("mode_selector", 40, 65, "Drive Mode Selector")?,
            spot("cluster_drive_mode_display", 30, 40, "Drive Mode Display")?,
            spot("comfort_mode", 30, 45, "Comfort Mode")?,
            spot("sport_mode", 30, 50, "Sport Mode")?,
        ],
    )?;
    Ok(module)
}

fn phone_connectivity() -> Result<Module, CatalogError> {
    let objectives = vec![
        step(
            "Bluetooth Settings",
            "bluetooth_settings",
            "Focus on the Bluetooth settings option inside the center screen.",
            "Bluetooth, because cables belong in the glovebox of history.",
        )?,
        step(
            "Phone List Screen",
            "phone_list_screen",
            "Locate the list of connected or available phones.",
            "If your phone appears in this list, you are one tap from hands-free greatness.",
        )?,
        step(
            "Phone Projection Activation",
            "projection_activation",
            "Find the setting that activates CarPlay or Android Auto.",
            "Projection puts maps, music, and messages on the big screen, where they belong.",
        )?,
        step(
            "Connected Device Confirmation",
            "connected_device_status",
            "Check for confirmation that your device is paired and ready.",
            "Connected. Congratulations, you just out-performed most help desks.",
        )?,
    ];
    let quiz = Quiz::new(
        "Which feature mirrors apps like Maps and Music onto the car screen?",
        vec![
            "Bluetooth".into(),
            "WiFi Hotspot".into(),
            "CarPlay / Android Auto".into(),
            "Seat Heater Controls".into(),
        ],
        2,
        "Correct! Projection is the mirror trick.",
        "Unless your seat heater streams music, rethink that one.",
    )?;
    let module = standard_module(
        6,
        "phone_connectivity",
        "Connecting Your Phone",
        objectives,
        quiz,
        next_module(7, "Phone connected! Feel free to ignore my calls while driving."),
        vec![
            spot("bluetooth_settings", 50, 40, "Bluetooth Settings")?,
            spot("phone_list_screen", 50, 45, "Phone List")?,
            spot("projection_activation", 50, 50, "CarPlay / Android Auto")?,
            spot("connected_device_status", 50, 55, "Connected Device Status")?,
        ],
    )?;
    Ok(module)
}

fn voice_commands() -> Result<Module, CatalogError> {
    let objectives = vec![
        step(
            "Voice Activation Button",
            "voice_button",
            "Find the microphone button on the right side of the steering wheel.",
            "Press it and speak. No wand required.",
        )?,
        step(
            "Listening Screen",
            "listening_screen",
            "Focus on the screen showing the listening indicator after pressing the button.",
            "When the car is listening, you are allowed to boss it around.",
        )?,
        step(
            "Wake Word Activation",
            "wake_word_reaction",
            "Say the wake phrase and watch the dashboard react.",
            "Say it loud, say it proud, and watch the dashboard snap to attention.",
        )?,
    ];
    let quiz = Quiz::new(
        "What wakes up the voice assistant without pressing anything?",
        vec![
            "The wake phrase".into(),
            "Honking twice".into(),
            "Opening the sunroof".into(),
            "Turning the radio up".into(),
        ],
        0,
        "Correct! Talking to your car is officially normal now.",
        "The sunroof cannot hear you. Try again.",
    )?;
    let module = standard_module(
        7,
        "voice_commands",
        "Mastering Voice Commands",
        objectives,
        quiz,
        next_module(8, "Voice mastered! Next, reversing without flattening a mailbox."),
        vec![
            spot("voice_button", 25, 45, "Voice Activation Button")?,
            spot("listening_screen", 50, 35, "Listening Screen")?,
            spot("wake_word_reaction", 40, 40, "Wake Word Reaction")?,
        ],
    )?;
    Ok(module)
}

fn parking_assist() -> Result<Module, CatalogError> {
    let objectives = vec![
        step(
            "Parking Assistance Button",
            "parking_button",
            "Find the parking assist button on the center console.",
            "The P button. Not for panic, for parking.",
        )?,
        step(
            "Backup Camera View",
            "backup_camera_screen",
            "Shift into reverse and focus on the backup camera view.",
            "A live movie of everything behind you. The mailbox has a starring role.",
        )?,
        step(
            "Guide Line Display",
            "parking_lines_display",
            "Find the colored guide lines displayed while reversing.",
            "Green means fine, yellow means careful, red means new taillights.",
        )?,
    ];
    let quiz = Quiz::new(
        "Which gear automatically activates the backup camera?",
        vec![
            "Park".into(),
            "Neutral".into(),
            "Reverse".into(),
            "Drive".into(),
        ],
        2,
        "Reverse it is. Back it up with confidence.",
        "In Park you are just admiring yourself. Try again.",
    )?;
    let module = standard_module(
        8,
        "parking_assist",
        "Parking Assistance and Backup Cameras",
        objectives,
        quiz,
        next_module(9, "Parking ninja unlocked. Now let's set some mood lighting."),
        vec![
            spot("parking_button", 45, 65, "Parking Assist Button")?,
            spot("backup_camera_screen", 50, 35, "Backup Camera View")?,
            spot("parking_lines_display", 50, 40, "Parking Guide Lines")?,
        ],
    )?;
    Ok(module)
}

fn ambient_lighting() -> Result<Module, CatalogError> {
    let objectives = vec![
        step(
            "Ambient Lighting Menu",
            "ambient_lighting_menu",
            "Focus on the menu where lighting color and brightness are adjusted.",
            "Time to turn the cabin into a rolling lounge.",
        )?,
        step(
            "Color Selection Panel",
            "color_selection_panel",
            "Locate the panel showing the available lighting colors.",
            "Pick a color. Bonus points if it matches your mood.",
        )?,
        step(
            "Brightness Control",
            "brightness_adjustment",
            "Find the brightness slider for the ambient lighting.",
            "More glow, less glow. You are the lighting director now.",
        )?,
    ];
    let quiz = Quiz::new(
        "Which menu changes the cabin lighting color?",
        vec![
            "Navigation Settings".into(),
            "Ambient Lighting Settings".into(),
            "Climate Control Menu".into(),
            "Phone Connectivity".into(),
        ],
        1,
        "You got it, mood lighting maestro.",
        "The map does not pick neon green for you. Try again.",
    )?;
    let module = standard_module(
        9,
        "ambient_lighting",
        "Customizing Ambient Lighting",
        objectives,
        quiz,
        next_module(10, "Vibes set! Let's wrap up by saving your driver profile."),
        vec![
            spot("ambient_lighting_menu", 50, 35, "Ambient Lighting Menu")?,
            spot("color_selection_panel", 50, 45, "Color Selection Panel")?,
            spot("brightness_adjustment", 50, 55, "Brightness Control")?,
        ],
    )?;
    Ok(module)
}

fn driver_profile() -> Result<Module, CatalogError> {
    let objectives = vec![
        step(
            "Driver Profiles Menu",
            "driver_profiles_menu",
            "Focus on the settings menu where driver profiles live.",
            "This is where you tell the car who is boss.",
        )?,
        step(
            "Create New Profile",
            "create_profile_button",
            "Locate the option to create a new driver profile.",
            "New profile. Carve your name into the machine.",
        )?,
        step(
            "Save Your Settings",
            "save_settings_screen",
            "Save your seat, mirror, and climate preferences to the profile.",
            "Seat comfy, mirrors right, temperature perfect. Save it like a high score.",
        )?,
    ];
    let quiz = Quiz::new(
        "Which settings can you save inside your driver profile?",
        vec![
            "Only seat position".into(),
            "Only climate settings".into(),
            "Seat, mirrors, and climate settings".into(),
            "Only favorite radio stations".into(),
        ],
        2,
        "Perfect. Your throne is saved exactly how you like it.",
        "Your favorite station cannot angle your mirrors. Try again.",
    )?;
    // The bonus module is spliced in here by data, not by numeric order.
    let module = standard_module(
        10,
        "driver_profile_setup",
        "Saving Your Driver Profile",
        objectives,
        quiz,
        next_module(11, "Profile locked in! One more surprise before the finish line."),
        vec![
            spot("driver_profiles_menu", 50, 35, "Driver Profiles Menu")?,
            spot("create_profile_button", 50, 45, "Create New Profile")?,
            spot("save_settings_screen", 50, 55, "Save Settings")?,
        ],
    )?;
    Ok(module)
}

fn mascot_bonus() -> Result<Module, CatalogError> {
    let objectives = vec![
        step(
            "Passenger Seat Area",
            "passenger_seat_zone",
            "Point the camera at the front passenger seat. A travel companion is about to move in.",
            "Welcome to the bonus round. The passenger seat is about to get interesting.",
        )?,
        step(
            "Place the Mascot",
            "mascot_placement_zone",
            "Tap the passenger seat to place the virtual mascot.",
            "Tap gently. You do not want to spook your new co-pilot.",
        )?,
        step(
            "Locate the Launch Button",
            "launch_button_zone",
            "A launch button has appeared. Tap it to begin the final sequence.",
            "There is the launch button, Commander. Things are about to get dramatic.",
        )?,
        step(
            "Fire the Launch Button",
            "launch_button_zone",
            "Tap the launch button, watch the sunroof open, and prepare for lift-off.",
            "And now, the moment everyone has been waiting for. Launch!",
        )?,
    ];
    let module = Module::new(
        ModuleId::new(11),
        "mascot_launch_bonus",
        "Bonus Module: Mascot Command",
        objectives,
        None,
        Completion::new(
            RouteTarget::Complete,
            "Mascot away! Mission success. You are officially ridiculous, and we love that.",
            true,
        ),
        vec![
            spot("passenger_seat_zone", 70, 50, "Passenger Seat")?,
            spot("mascot_placement_zone", 70, 50, "Place Mascot Here")?,
            spot("launch_button_zone", 50, 70, "Launch Button")?,
        ],
        ModuleFlow::Staged {
            stages: vec![
                stage("passenger_seat_zone")?,
                stage("mascot_placement_zone")?
                    .with_places_item()
                    .with_arms_action(),
                stage("launch_button_zone")?,
                stage("launch_button_zone")?,
            ],
        },
    )?;
    Ok(module.as_bonus())
}

fn overview_script() -> OverviewScript {
    let steps = vec![
        OverviewStep {
            text: "Welcome to the dashboard tutorial. Hold your phone steady and point it at the dashboard.".into(),
            narration: "First things first: hold the phone steady and aim it at the dashboard. You have got this.".into(),
        },
        OverviewStep {
            text: "You'll see highlights appear over real parts of your dashboard.".into(),
            narration: "Those glowing highlights are not ghosts. They are your new best friends.".into(),
        },
        OverviewStep {
            text: "Each hotspot guides you through one feature, step by step. Stay in camera mode the whole time.".into(),
            narration: "Keep the phone up. This is a guided tour, not a podcast.".into(),
        },
        OverviewStep {
            text: "Complete simple tasks to move forward. Progress is saved as you go.".into(),
            narration: "Small tasks, steady progress. I will be keeping score.".into(),
        },
        OverviewStep {
            text: "Ready to start? Tap the big button when you're set!".into(),
            narration: "If you are ready to master this dashboard, hit that start button like it owes you money.".into(),
        },
    ];

    OverviewScript {
        steps,
        start_label: "Start the Tutorial!".into(),
        start_narration: "And we're off! Buckle up.".into(),
        start_target: RouteTarget::Module(ModuleId::new(1)),
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
