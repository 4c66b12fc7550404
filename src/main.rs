//! Desktop front end for the menu layer
//!
//! Usage: `rpg_menu [config.json]` (defaults to `menu.json` in the working
//! directory; a missing file means default settings).

use anyhow::{Context, Result, anyhow};
use rpg_menu::gui::{MenuStyle, ThumbnailCache, render_menu};
use rpg_menu::input_system::{InputEvent, InputSystem};
use rpg_menu::save::SaveManager;
use rpg_menu::{DesktopHost, Localization, MenuConfig, MenuService, MenuStateId, screens};
use sdl2::pixels::Color;
use sdl2::video::FullscreenType;

const GAME_WIDTH: u32 = 640;
const GAME_HEIGHT: u32 = 360;
const WINDOW_SCALE: u32 = 2;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args().nth(1).unwrap_or_else(|| "menu.json".to_string());
    let config = MenuConfig::load_or_default(&config_path)?;

    let saves = SaveManager::new(&config.save_dir)
        .with_context(|| format!("failed to open save directory {}", config.save_dir.display()))?
        .with_max_slots(config.slots.max_slots);
    log::info!("save directory: {}", saves.directory().display());
    let host = DesktopHost::new(saves, config.fullscreen);

    let mut i18n = Localization::builtin();
    if let Some(dir) = &config.locale_dir {
        let loaded = i18n.load_dir(dir)?;
        log::info!("loaded {} locale file(s) from {}", loaded, dir.display());
    }
    if !i18n.set_locale(&config.locale) {
        log::warn!("unknown locale '{}', keeping '{}'", config.locale, i18n.locale());
    }

    let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
    let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG).map_err(|e| anyhow!(e))?;

    let window = video_subsystem
        .window("RPG Menu", GAME_WIDTH * WINDOW_SCALE, GAME_HEIGHT * WINDOW_SCALE)
        .position_centered()
        .build()?;
    let mut canvas = window.into_canvas().build()?;

    // Set logical size for automatic pixel-perfect scaling
    canvas.set_logical_size(GAME_WIDTH, GAME_HEIGHT)?;

    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;
    let input = InputSystem::new();
    let style = MenuStyle::default();
    let mut thumbnails = ThumbnailCache::new(&texture_creator);

    let mut menu = MenuService::new(Box::new(host), i18n).with_slot_grid(config.slots);
    screens::install_standard_menus(&mut menu)?;

    let mut fullscreen = false;

    'running: loop {
        for event in input.poll_events(&mut event_pump) {
            match event {
                InputEvent::Quit => menu.request_exit(),
                InputEvent::KeyUp(key) => {
                    if !menu.dispatch_input(key) {
                        log::debug!("{:?} passed through to the game", key);
                    }
                }
            }
            if menu.exit_requested() {
                break 'running;
            }
        }

        let wanted = menu.host().is_fullscreen();
        if wanted != fullscreen {
            let mode = if wanted {
                FullscreenType::Desktop
            } else {
                FullscreenType::Off
            };
            match canvas.window_mut().set_fullscreen(mode) {
                Ok(()) => fullscreen = wanted,
                Err(e) => log::warn!("failed to switch fullscreen: {}", e),
            }
        }

        thumbnails.sync(menu.stage());

        // Stand-in for the game world behind the menus
        let world = match menu.current_state() {
            Some(MenuStateId::Idle) => Color::RGB(60, 110, 60),
            _ => Color::RGB(40, 70, 40),
        };
        canvas.set_draw_color(world);
        canvas.clear();

        render_menu(&mut canvas, &menu, &style, &thumbnails).map_err(|e| anyhow!(e))?;
        canvas.present();

        std::thread::sleep(std::time::Duration::new(0, 1_000_000_000u32 / 60));
    }

    log::info!("exiting");
    Ok(())
}
